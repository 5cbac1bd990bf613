use crate::{ProfileMenuView, Resource, ResourceKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub heading: String,
    pub current_url: Option<String>,
    pub search_text: String,
    pub categories: Vec<ChoiceView>,
    pub show_category_clear: bool,
    pub type_tabs: Vec<TypeTabView>,
    pub tags: Vec<ChoiceView>,
    pub show_clear_all_tags: bool,
    pub resources: ResourceListView,
    pub detail: DetailView,
    /// Present only while a user is signed in.
    pub profile_menu: Option<ProfileMenuView>,
    pub dirty: bool,
}

/// A category button or tag chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceView {
    pub name: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeTabView {
    pub label: &'static str,
    pub kind: Option<ResourceKind>,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceListView {
    Loading,
    Loaded(Vec<ResourceCard>),
    /// The last query failed; nothing to show.
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceCard {
    pub id: String,
    pub title: String,
    pub kind: ResourceKind,
    pub category: String,
    pub tags: Vec<String>,
    pub upvotes: u32,
    pub bookmarks: u32,
    pub upvoted: bool,
    pub bookmarked: bool,
    pub author: Option<String>,
}

impl From<&Resource> for ResourceCard {
    fn from(resource: &Resource) -> Self {
        Self {
            id: resource.id.clone(),
            title: resource.title.clone(),
            kind: resource.resource_type,
            category: resource.category_name.clone(),
            tags: resource.tags.clone(),
            upvotes: resource.upvote_count,
            bookmarks: resource.bookmark_count.unwrap_or(0),
            upvoted: resource.has_upvoted,
            bookmarked: resource.is_bookmarked,
            author: resource
                .creator
                .as_ref()
                .map(|creator| format!("{} (@{})", creator.name, creator.username)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    Closed,
    Loading { id: String },
    Loaded(Box<Resource>),
    Unavailable { id: String },
}
