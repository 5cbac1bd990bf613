use serde::{Deserialize, Serialize};

/// Kind of catalogued resource; `None` in a filter means "all types".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Video,
    Article,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 2] = [ResourceKind::Video, ResourceKind::Article];

    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Video => "video",
            ResourceKind::Article => "article",
        }
    }

    /// Exact, case-sensitive match on the wire name.
    pub fn from_param(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }
}

/// Separator of tag lists in the address bar and the API query.
pub const TAG_SEPARATOR: &str = ",";

/// Selected tag names in insertion order, without duplicates or empty names.
///
/// Names containing [`TAG_SEPARATOR`] are refused, so every set survives
/// [`TagSet::joined`] followed by [`TagSet::from_joined`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TagSet(Vec<String>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the tag was empty, contained the separator, or was already present.
    pub fn insert(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if !Self::is_valid_name(&tag) || self.contains(&tag) {
            return false;
        }
        self.0.push(tag);
        true
    }

    pub fn is_valid_name(tag: &str) -> bool {
        !tag.is_empty() && !tag.contains(TAG_SEPARATOR)
    }

    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|existing| existing != tag);
        self.0.len() != before
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|existing| existing == tag)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Comma-joined form used both in the address bar and the API query.
    pub fn joined(&self) -> String {
        self.0.join(TAG_SEPARATOR)
    }

    /// Splits a comma-joined list, skipping empty segments and repeats.
    pub fn from_joined(raw: &str) -> Self {
        raw.split(TAG_SEPARATOR).collect()
    }
}

impl<S: Into<String>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tags = TagSet::new();
        tags.extend(iter);
        tags
    }
}

impl<S: Into<String>> Extend<S> for TagSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for tag in iter {
            self.insert(tag);
        }
    }
}

/// The canonical set of active browsing filters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FilterState {
    pub search_text: Option<String>,
    pub tags: TagSet,
    pub resource_type: Option<ResourceKind>,
    pub category: Option<String>,
}

impl FilterState {
    pub fn is_unfiltered(&self) -> bool {
        self.search_text.is_none()
            && self.tags.is_empty()
            && self.resource_type.is_none()
            && self.category.is_none()
    }
}

/// Per-field instruction inside a [`FilterPatch`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Patch<T> {
    #[default]
    Keep,
    Set(T),
    Clear,
}

impl<T> Patch<T> {
    fn apply(self, current: Option<T>) -> Option<T> {
        match self {
            Patch::Keep => current,
            Patch::Set(value) => Some(value),
            Patch::Clear => None,
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    /// `Some` sets the field, `None` clears it.
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Patch::Set(value),
            None => Patch::Clear,
        }
    }
}

/// Partial update of a [`FilterState`]; fields left as `Keep` are untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterPatch {
    pub search_text: Patch<String>,
    pub tags: Patch<TagSet>,
    pub resource_type: Patch<ResourceKind>,
    pub category: Patch<String>,
}

impl FilterPatch {
    pub fn search_text(value: impl Into<String>) -> Self {
        Self {
            search_text: Patch::Set(value.into()),
            ..Self::default()
        }
    }

    pub fn tags(tags: TagSet) -> Self {
        Self {
            tags: Patch::Set(tags),
            ..Self::default()
        }
    }

    pub fn resource_type(kind: Option<ResourceKind>) -> Self {
        Self {
            resource_type: kind.into(),
            ..Self::default()
        }
    }

    pub fn category(category: Option<String>) -> Self {
        Self {
            category: category.into(),
            ..Self::default()
        }
    }
}

/// Merges `patch` over `current`. Empty text and an empty tag set count as cleared.
pub fn apply_update(current: &FilterState, patch: FilterPatch) -> FilterState {
    let tags = match patch.tags {
        Patch::Keep => current.tags.clone(),
        Patch::Set(tags) => tags,
        Patch::Clear => TagSet::new(),
    };

    FilterState {
        search_text: non_empty(patch.search_text.apply(current.search_text.clone())),
        tags,
        resource_type: patch.resource_type.apply(current.resource_type),
        category: non_empty(patch.category.apply(current.category.clone())),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}
