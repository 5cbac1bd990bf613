use std::time::{Duration, Instant};

use crate::cache::{ResultCache, DEFAULT_CACHE_CAPACITY, DEFAULT_CACHE_TTL};

use crate::debounce::{Debouncer, DEFAULT_QUIET_PERIOD};
use crate::view_model::{
    AppViewModel, ChoiceView, DetailView, ResourceCard, ResourceListView, TypeTabView,
};
use crate::{Category, FilterState, ProfileMenuView, Resource, ResourceKind, SessionContext, Tag};

pub const DEFAULT_BASE_PATH: &str = "/resources";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncSettings {
    pub quiet_period: Duration,
    pub base_path: String,
    /// Most resource lists kept for instant re-display.
    pub cache_capacity: usize,
    pub cache_ttl: Duration,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            quiet_period: DEFAULT_QUIET_PERIOD,
            base_path: DEFAULT_BASE_PATH.to_string(),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            cache_ttl: DEFAULT_CACHE_TTL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) enum ListStatus {
    #[default]
    Loading,
    Loaded(Vec<Resource>),
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) enum DetailStatus {
    #[default]
    Closed,
    Loading { id: String },
    Loaded(Resource),
    Unavailable { id: String },
}

impl DetailStatus {
    pub(crate) fn awaits(&self, id: &str) -> bool {
        matches!(self, DetailStatus::Loading { id: pending } if pending == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub(crate) settings: SyncSettings,
    /// Live filters, updated on every interaction.
    pub(crate) filters: FilterState,
    pub(crate) debouncer: Debouncer<FilterState>,
    /// Filters of the most recent emission; `None` before the first one.
    pub(crate) debounced: Option<FilterState>,
    pub(crate) current_url: Option<String>,
    pub(crate) results: ListStatus,
    pub(crate) cache: ResultCache,
    /// Latest instant carried by a message; the core never reads the clock.
    pub(crate) clock: Option<Instant>,
    pub(crate) tags: Vec<Tag>,
    pub(crate) categories: Vec<Category>,
    pub(crate) detail: DetailStatus,
    pub(crate) session: SessionContext,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: SyncSettings) -> Self {
        Self {
            debouncer: Debouncer::new(settings.quiet_period),
            cache: ResultCache::new(settings.cache_capacity, settings.cache_ttl),
            settings,
            ..Self::default()
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn debounced_filters(&self) -> Option<&FilterState> {
        self.debounced.as_ref()
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn has_pending_sync(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn cached_result_count(&self) -> usize {
        self.cache.len()
    }

    pub fn view(&self) -> AppViewModel {
        let active_category = self.filters.category.as_deref();
        let heading = match self.debounced.as_ref().and_then(|f| f.category.as_deref()) {
            Some(category) => format!("{category} Resources"),
            None => "Resources".to_string(),
        };

        let categories = self
            .categories
            .iter()
            .map(|category| ChoiceView {
                name: category.name.clone(),
                selected: active_category == Some(category.name.as_str()),
            })
            .collect();

        let mut tags: Vec<ChoiceView> = self
            .tags
            .iter()
            .map(|tag| ChoiceView {
                name: tag.name.clone(),
                selected: self.filters.tags.contains(&tag.name),
            })
            .collect();
        // Selected tags the tag list does not know (yet) stay visible and removable.
        for selected in self.filters.tags.iter() {
            if !self.tags.iter().any(|tag| tag.name == selected) {
                tags.push(ChoiceView {
                    name: selected.to_string(),
                    selected: true,
                });
            }
        }

        let type_tabs = std::iter::once(None)
            .chain(ResourceKind::ALL.into_iter().map(Some))
            .map(|kind| TypeTabView {
                label: tab_label(kind),
                kind,
                selected: self.filters.resource_type == kind,
            })
            .collect();

        let resources = match &self.results {
            ListStatus::Loading => ResourceListView::Loading,
            ListStatus::Loaded(list) => {
                ResourceListView::Loaded(list.iter().map(ResourceCard::from).collect())
            }
            ListStatus::Unavailable => ResourceListView::Unavailable,
        };

        let detail = match &self.detail {
            DetailStatus::Closed => DetailView::Closed,
            DetailStatus::Loading { id } => DetailView::Loading { id: id.clone() },
            DetailStatus::Loaded(resource) => DetailView::Loaded(Box::new(resource.clone())),
            DetailStatus::Unavailable { id } => DetailView::Unavailable { id: id.clone() },
        };

        AppViewModel {
            heading,
            current_url: self.current_url.clone(),
            search_text: self.filters.search_text.clone().unwrap_or_default(),
            show_category_clear: active_category.is_some(),
            categories,
            type_tabs,
            show_clear_all_tags: !self.filters.tags.is_empty(),
            tags,
            resources,
            detail,
            profile_menu: self
                .session
                .is_signed_in()
                .then(|| ProfileMenuView::from_session(&self.session)),
            dirty: self.dirty,
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns whether the state changed since the last call and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

fn tab_label(kind: Option<ResourceKind>) -> &'static str {
    match kind {
        None => "All",
        Some(ResourceKind::Video) => "Video",
        Some(ResourceKind::Article) => "Article",
    }
}
