use std::time::Instant;

use crate::{
    Category, FilterPatch, FilterState, ProfileAction, Resource, ResourceKind, SessionUser, Tag,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The browse page was opened with this address bar query string.
    Mounted { query: String, at: Instant },
    /// Back/forward navigation restored an entry with this query string.
    Navigated { query: String, at: Instant },
    /// User changed one of the browse filters.
    Filter { edit: FilterEdit, at: Instant },
    /// Clock tick driving the debouncer.
    Tick { now: Instant },
    TagsLoaded(Result<Vec<Tag>, String>),
    CategoriesLoaded(Result<Vec<Category>, String>),
    /// Response for the resource query issued for `key`.
    ResourcesLoaded {
        key: FilterState,
        result: Result<Vec<Resource>, String>,
    },
    /// The host could not write the address bar.
    UrlSyncFailed { url: String, reason: String },
    /// User opened the detail view of a single resource.
    ResourceOpened { id: String },
    ResourceLoaded {
        id: String,
        result: Result<Resource, String>,
    },
    /// Auth service reported the current user (or none).
    SessionChanged(Option<SessionUser>),
    /// User picked an entry of the profile menu.
    ProfileMenu(ProfileAction),
    SignOutFinished(Result<(), String>),
}

/// A single user interaction with the browse filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEdit {
    SearchTextChanged(String),
    TagToggled { tag: String, selected: bool },
    TagsCleared,
    CategorySelected(String),
    CategoryCleared,
    /// `None` is the "all" tab.
    ResourceTypeSelected(Option<ResourceKind>),
    Patch(FilterPatch),
}
