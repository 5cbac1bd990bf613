//! Terminal host: wires the pure core to the engine, stdin and stdout.
mod app;
mod commands;
pub mod config;
mod effects;
mod history;
mod render;

pub use app::run_app;

use curator_core::Msg;

/// Everything the host loop reacts to.
pub enum HostInput {
    Msg(Msg),
    Line(String),
    InputClosed,
}
