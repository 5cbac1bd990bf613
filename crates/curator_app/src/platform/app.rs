use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::{Duration, Instant};

use curator_core::{update, AppState, Msg, SyncSettings};
use curator_engine::{EngineHandle, HttpSettings, ReqwestApi, ReqwestAuthClient};
use curator_logging::{curator_info, curator_warn};

use super::commands::{parse_command, Command, HELP};
use super::config::Cli;
use super::effects::EffectRunner;
use super::history::{split_address, BrowserHistory};
use super::render;
use super::HostInput;

pub fn run_app(cli: Cli) -> anyhow::Result<()> {
    curator_logging::initialize(cli.log_destination(), cli.log_level());

    let http = HttpSettings::default();
    let api = ReqwestApi::new(&cli.api_url, http.clone())?;
    let auth = ReqwestAuthClient::new(&cli.auth_url(), http)?;
    let engine = EngineHandle::new(Arc::new(api), Arc::new(auth))?;
    curator_info!("Using api {} and auth {}", cli.api_url, cli.auth_url());

    let settings = cli.sync_settings();
    let query = cli.query.trim_start_matches('?').to_string();
    let initial_url = if query.is_empty() {
        settings.base_path.clone()
    } else {
        format!("{}?{}", settings.base_path, query)
    };

    let (host_tx, host_rx) = mpsc::channel::<HostInput>();
    let runner = EffectRunner::new(engine, BrowserHistory::new(initial_url), host_tx.clone());
    spawn_ticker(host_tx.clone());
    spawn_stdin_reader(host_tx);

    let mut host = Host::new(settings, runner);
    host.dispatch(Msg::Mounted {
        query,
        at: Instant::now(),
    });
    println!("{HELP}");

    while let Ok(input) = host_rx.recv() {
        match input {
            HostInput::Msg(msg) => host.dispatch(msg),
            HostInput::Line(line) if line.trim().is_empty() => {}
            HostInput::Line(line) => match parse_command(&line, Instant::now()) {
                Ok(Command::Dispatch(msg)) => host.dispatch(msg),
                Ok(Command::Back) => host.go_back(),
                Ok(Command::Help) => println!("{HELP}"),
                Ok(Command::Quit) => break,
                Err(err) => println!("{err}"),
            },
            HostInput::InputClosed => break,
        }
    }

    curator_info!("Shutting down");
    Ok(())
}

struct Host {
    state: AppState,
    runner: EffectRunner,
    base_path: String,
}

impl Host {
    fn new(settings: SyncSettings, runner: EffectRunner) -> Self {
        Self {
            base_path: settings.base_path.clone(),
            state: AppState::with_settings(settings),
            runner,
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let mut inbox = VecDeque::from([msg]);
        while let Some(msg) = inbox.pop_front() {
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;
            inbox.extend(self.runner.run(effects));
        }

        if self.state.consume_dirty() {
            print!("{}", render::render(&self.state.view()));
        }
    }

    fn go_back(&mut self) {
        let Some(address) = self.runner.history_mut().back().map(str::to_string) else {
            println!("no earlier page");
            return;
        };
        let (path, query) = split_address(&address);
        if path == self.base_path {
            self.dispatch(Msg::Navigated {
                query: query.to_string(),
                at: Instant::now(),
            });
        } else {
            println!("now at {address}");
        }
    }
}

/// Drives the debouncer; the core never reads the clock itself.
fn spawn_ticker(host_tx: mpsc::Sender<HostInput>) {
    thread::spawn(move || {
        let interval = Duration::from_millis(50);
        while host_tx
            .send(HostInput::Msg(Msg::Tick { now: Instant::now() }))
            .is_ok()
        {
            thread::sleep(interval);
        }
    });
}

fn spawn_stdin_reader(host_tx: mpsc::Sender<HostInput>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if host_tx.send(HostInput::Line(line)).is_err() {
                        return;
                    }
                }
                Err(err) => {
                    curator_warn!("Reading stdin failed: {}", err);
                    break;
                }
            }
        }
        let _ = host_tx.send(HostInput::InputClosed);
    });
}
