use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use curator_core::{FilterState, QueryParams};
use curator_logging::{curator_debug, curator_warn};

use crate::{AuthClient, DirectoryApi, EngineEvent};

enum EngineCommand {
    FetchResources { key: FilterState, params: QueryParams },
    FetchResource { id: String },
    FetchTags,
    FetchCategories,
    FetchSession,
    SignOut,
}

/// Runs API calls on a background tokio runtime and reports results as [`EngineEvent`]s.
///
/// Requests run concurrently; events arrive in completion order, not request order.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(api: Arc<dyn DirectoryApi>, auth: Arc<dyn AuthClient>) -> std::io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let auth = auth.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let event = handle_command(api.as_ref(), auth.as_ref(), command).await;
                    if event_tx.send(event).is_err() {
                        curator_debug!("Engine event dropped; receiver gone");
                    }
                });
            }
            curator_debug!("Engine command channel closed");
        });

        Ok(Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        })
    }

    pub fn fetch_resources(&self, key: FilterState, params: QueryParams) {
        self.send(EngineCommand::FetchResources { key, params });
    }

    pub fn fetch_resource(&self, id: impl Into<String>) {
        self.send(EngineCommand::FetchResource { id: id.into() });
    }

    pub fn fetch_tags(&self) {
        self.send(EngineCommand::FetchTags);
    }

    pub fn fetch_categories(&self) {
        self.send(EngineCommand::FetchCategories);
    }

    pub fn fetch_session(&self) {
        self.send(EngineCommand::FetchSession);
    }

    pub fn sign_out(&self) {
        self.send(EngineCommand::SignOut);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.recv_timeout(timeout).ok()
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            curator_warn!("Engine thread is gone; command dropped");
        }
    }
}

async fn handle_command(
    api: &dyn DirectoryApi,
    auth: &dyn AuthClient,
    command: EngineCommand,
) -> EngineEvent {
    match command {
        EngineCommand::FetchResources { key, params } => EngineEvent::ResourcesFetched {
            result: api.resources(&params).await,
            key,
        },
        EngineCommand::FetchResource { id } => EngineEvent::ResourceFetched {
            result: api.resource(&id).await,
            id,
        },
        EngineCommand::FetchTags => EngineEvent::TagsFetched(api.tags().await),
        EngineCommand::FetchCategories => EngineEvent::CategoriesFetched(api.categories().await),
        EngineCommand::FetchSession => EngineEvent::SessionFetched(auth.session().await),
        EngineCommand::SignOut => EngineEvent::SignedOut(auth.sign_out().await),
    }
}
