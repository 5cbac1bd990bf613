use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use curator_core::{Effect, Msg};
use curator_engine::{EngineEvent, EngineHandle};
use curator_logging::{curator_debug, curator_info, curator_warn};

use super::history::BrowserHistory;
use super::HostInput;

pub struct EffectRunner {
    engine: EngineHandle,
    history: BrowserHistory,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle, history: BrowserHistory, host_tx: mpsc::Sender<HostInput>) -> Self {
        let runner = Self { engine, history };
        runner.spawn_event_loop(host_tx);
        runner
    }

    pub fn history_mut(&mut self) -> &mut BrowserHistory {
        &mut self.history
    }

    /// Executes effects and returns messages that must be handled right away.
    pub fn run(&mut self, effects: Vec<Effect>) -> Vec<Msg> {
        let mut follow_ups = Vec::new();
        for effect in effects {
            match effect {
                Effect::FetchSession => self.engine.fetch_session(),
                Effect::FetchTags => self.engine.fetch_tags(),
                Effect::FetchCategories => self.engine.fetch_categories(),
                Effect::FetchResources { key, params } => {
                    curator_info!("FetchResources params={}", params.to_query_string());
                    self.engine.fetch_resources(key, params);
                }
                Effect::FetchResource { id } => {
                    curator_info!("FetchResource id={}", id);
                    self.engine.fetch_resource(id);
                }
                Effect::ReplaceUrl { url } => {
                    if let Err(err) = self.history.replace(&url) {
                        follow_ups.push(Msg::UrlSyncFailed {
                            url,
                            reason: err.to_string(),
                        });
                    } else {
                        curator_debug!("Address bar now {}", url);
                    }
                }
                Effect::Navigate { path } => {
                    if let Err(err) = self.history.push(&path) {
                        curator_warn!("Navigation to {} failed: {}", path, err);
                    } else {
                        curator_info!("Navigated to {}", path);
                    }
                }
                Effect::SignOut => self.engine.sign_out(),
            }
        }
        follow_ups
    }

    fn spawn_event_loop(&self, host_tx: mpsc::Sender<HostInput>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            let Some(event) = engine.recv_timeout(Duration::from_millis(100)) else {
                continue;
            };
            if host_tx.send(HostInput::Msg(map_event(event))).is_err() {
                break;
            }
        });
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::ResourcesFetched { key, result } => Msg::ResourcesLoaded {
            key,
            result: result.map_err(|err| err.to_string()),
        },
        EngineEvent::ResourceFetched { id, result } => Msg::ResourceLoaded {
            id,
            result: result.map_err(|err| err.to_string()),
        },
        EngineEvent::TagsFetched(result) => Msg::TagsLoaded(result.map_err(|err| err.to_string())),
        EngineEvent::CategoriesFetched(result) => {
            Msg::CategoriesLoaded(result.map_err(|err| err.to_string()))
        }
        EngineEvent::SessionFetched(result) => match result {
            Ok(user) => Msg::SessionChanged(user),
            Err(err) => {
                curator_warn!("Session lookup failed: {}", err);
                Msg::SessionChanged(None)
            }
        },
        EngineEvent::SignedOut(result) => Msg::SignOutFinished(result.map_err(|err| err.to_string())),
    }
}
