use std::time::Instant;

use curator_logging::{curator_debug, curator_info, curator_warn};

use crate::state::{DetailStatus, ListStatus};
use crate::{
    apply_update, parse_query, serialize_to_url, to_query_params, AppState, Effect, FilterEdit,
    FilterPatch, FilterState, Msg, Patch, ProfileAction, TagSet,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Mounted { query, at } => {
            state.clock = Some(at);
            let mut effects = vec![Effect::FetchSession, Effect::FetchTags, Effect::FetchCategories];
            effects.extend(restore_from_query(&mut state, &query, at));
            effects
        }
        Msg::Navigated { query, at } => {
            state.clock = Some(at);
            restore_from_query(&mut state, &query, at)
        }
        Msg::Filter { edit, at } => {
            state.clock = Some(at);
            let next = apply_edit(&state.filters, edit);
            if next != state.filters {
                state.filters = next.clone();
                state.debouncer.push(next, at);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::Tick { now } => {
            state.clock = Some(now);
            match state.debouncer.poll(now) {
                Some(filters) => emit(&mut state, filters, now),
                None => Vec::new(),
            }
        }
        Msg::TagsLoaded(result) => {
            state.tags = result.unwrap_or_else(|reason| {
                curator_warn!("Tag list unavailable: {}", reason);
                Vec::new()
            });
            state.mark_dirty();
            Vec::new()
        }
        Msg::CategoriesLoaded(result) => {
            state.categories = result.unwrap_or_else(|reason| {
                curator_warn!("Category list unavailable: {}", reason);
                Vec::new()
            });
            state.mark_dirty();
            Vec::new()
        }
        Msg::ResourcesLoaded { key, result } => {
            apply_resources(&mut state, key, result);
            Vec::new()
        }
        Msg::UrlSyncFailed { url, reason } => {
            // The in-memory filters stay authoritative.
            curator_warn!("Address bar update to {} failed: {}", url, reason);
            Vec::new()
        }
        Msg::ResourceOpened { id } => {
            state.detail = DetailStatus::Loading { id: id.clone() };
            state.mark_dirty();
            vec![Effect::FetchResource { id }]
        }
        Msg::ResourceLoaded { id, result } => {
            if state.detail.awaits(&id) {
                state.detail = match result {
                    Ok(resource) => DetailStatus::Loaded(resource),
                    Err(reason) => {
                        curator_warn!("Resource {} unavailable: {}", id, reason);
                        DetailStatus::Unavailable { id }
                    }
                };
                state.mark_dirty();
            } else {
                curator_debug!("Ignoring response for resource {} that is no longer open", id);
            }
            Vec::new()
        }
        Msg::SessionChanged(user) => {
            if state.session.user != user {
                state.session.user = user;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ProfileMenu(action) => match action {
            ProfileAction::Profile => vec![navigate("/profile")],
            ProfileAction::Settings => vec![navigate("/settings")],
            ProfileAction::SignOut => {
                if state.session.signing_out {
                    Vec::new()
                } else {
                    state.session.signing_out = true;
                    state.mark_dirty();
                    vec![Effect::SignOut]
                }
            }
        },
        Msg::SignOutFinished(result) => {
            state.session.signing_out = false;
            state.mark_dirty();
            match result {
                Ok(()) => {
                    state.session.user = None;
                    vec![navigate("/")]
                }
                Err(reason) => {
                    curator_warn!("Sign out failed: {}", reason);
                    Vec::new()
                }
            }
        }
    };

    (state, effects)
}

fn apply_edit(current: &FilterState, edit: FilterEdit) -> FilterState {
    let patch = match edit {
        FilterEdit::SearchTextChanged(text) => FilterPatch::search_text(text),
        FilterEdit::TagToggled { tag, selected } => {
            let mut tags = current.tags.clone();
            if selected {
                if !TagSet::is_valid_name(&tag) {
                    curator_warn!("Ignoring tag {:?}: not a valid tag name", tag);
                }
                tags.insert(tag);
            } else {
                tags.remove(&tag);
            }
            FilterPatch::tags(tags)
        }
        FilterEdit::TagsCleared => FilterPatch {
            tags: Patch::Clear,
            ..FilterPatch::default()
        },
        FilterEdit::CategorySelected(name) => FilterPatch::category(Some(name)),
        FilterEdit::CategoryCleared => FilterPatch::category(None),
        FilterEdit::ResourceTypeSelected(kind) => FilterPatch::resource_type(kind),
        FilterEdit::Patch(patch) => patch,
    };
    apply_update(current, patch)
}

/// Replaces the live filters from an address and emits them without waiting.
fn restore_from_query(state: &mut AppState, query: &str, at: Instant) -> Vec<Effect> {
    let filters = parse_query(query);
    curator_debug!("Restoring filters {:?} at {:?}", filters, at);
    state.debouncer.cancel();
    if state.filters != filters {
        state.filters = filters.clone();
        state.mark_dirty();
    }
    emit(state, filters, at)
}

/// Publishes a stable filter set: one resource query and one address bar replacement.
fn emit(state: &mut AppState, filters: FilterState, now: Instant) -> Vec<Effect> {
    if state.debounced.as_ref() == Some(&filters) {
        curator_debug!("Filters unchanged since last sync; nothing to publish");
        return Vec::new();
    }

    let url = serialize_to_url(&filters, &state.settings.base_path);
    let params = to_query_params(&filters);
    curator_info!("Syncing filters url={} params={}", url, params.to_query_string());

    state.results = match state.cache.get(&filters, now) {
        Some(cached) => ListStatus::Loaded(cached.to_vec()),
        None => ListStatus::Loading,
    };
    state.current_url = Some(url.clone());
    state.debounced = Some(filters.clone());
    state.mark_dirty();

    vec![
        Effect::ReplaceUrl { url },
        Effect::FetchResources {
            key: filters,
            params,
        },
    ]
}

fn apply_resources(
    state: &mut AppState,
    key: FilterState,
    result: Result<Vec<crate::Resource>, String>,
) {
    let is_latest = state.debounced.as_ref() == Some(&key);
    match result {
        Ok(resources) => {
            if is_latest {
                state.results = ListStatus::Loaded(resources.clone());
                state.mark_dirty();
            } else {
                curator_debug!("Caching stale resource response for {:?}", key);
            }
            match state.clock {
                Some(now) => state.cache.insert(key, resources, now),
                None => curator_debug!("No clock reading yet; result for {:?} not cached", key),
            }
        }
        Err(reason) => {
            curator_warn!("Resource query for {:?} failed: {}", key, reason);
            if is_latest {
                state.results = ListStatus::Unavailable;
                state.mark_dirty();
            }
        }
    }
}

fn navigate(path: &str) -> Effect {
    Effect::Navigate {
        path: path.to_string(),
    }
}
