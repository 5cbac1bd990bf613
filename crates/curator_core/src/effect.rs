use crate::{FilterState, QueryParams};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchSession,
    FetchTags,
    FetchCategories,
    /// Query resources; the response must come back tagged with `key`.
    FetchResources { key: FilterState, params: QueryParams },
    /// Replace the current history entry, without adding a back-stack entry.
    ReplaceUrl { url: String },
    FetchResource { id: String },
    /// Push a new history entry.
    Navigate { path: String },
    SignOut,
}
