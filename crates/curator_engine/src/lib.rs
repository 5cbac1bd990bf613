//! Curator engine: HTTP clients and effect execution.
mod api;
mod auth;
mod engine;
mod http;
mod types;

pub use api::{DirectoryApi, ReqwestApi};
pub use auth::{AuthClient, ReqwestAuthClient};
pub use engine::EngineHandle;
pub use http::HttpSettings;
pub use types::{ApiError, EngineEvent, FailureKind};
