use curator_core::{Category, FilterState, Resource, SessionUser, Tag};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    ResourcesFetched {
        key: FilterState,
        result: Result<Vec<Resource>, ApiError>,
    },
    ResourceFetched {
        id: String,
        result: Result<Resource, ApiError>,
    },
    TagsFetched(Result<Vec<Tag>, ApiError>),
    CategoriesFetched(Result<Vec<Category>, ApiError>),
    SessionFetched(Result<Option<SessionUser>, ApiError>),
    SignedOut(Result<(), ApiError>),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: FailureKind,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Why a request failed, kept separate from the human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FailureKind {
    #[error("bad base address")]
    InvalidUrl,
    #[error("server answered {0}")]
    HttpStatus(u16),
    #[error("request timed out")]
    Timeout,
    #[error("body over {max_bytes} bytes")]
    TooLarge { max_bytes: u64, actual: Option<u64> },
    #[error("malformed response body")]
    Decode,
    #[error("connection failed")]
    Network,
}
