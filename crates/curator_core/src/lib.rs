//! Curator core: pure filter synchronization state machine and view-model helpers.
mod cache;
mod debounce;
mod effect;
mod filter;
mod msg;
mod query;
mod records;
mod session;
mod state;
mod update;
mod view_model;

pub use cache::{DEFAULT_CACHE_CAPACITY, DEFAULT_CACHE_TTL};
pub use debounce::{Debouncer, DEFAULT_QUIET_PERIOD};
pub use effect::Effect;
pub use filter::{
    apply_update, FilterPatch, FilterState, Patch, ResourceKind, TagSet, TAG_SEPARATOR,
};
pub use msg::{FilterEdit, Msg};
pub use query::{parse_query, serialize_to_url, to_query_params, QueryParams};
pub use records::{ApprovalStatus, Category, Creator, Language, Resource, SessionUser, Tag};
pub use session::{ProfileAction, ProfileMenuView, SessionContext};
pub use state::{AppState, SyncSettings, DEFAULT_BASE_PATH};
pub use update::update;
pub use view_model::{
    AppViewModel, ChoiceView, DetailView, ResourceCard, ResourceListView, TypeTabView,
};
