//! Conversions between [`FilterState`] and its two textual forms: the address
//! bar query string and the outbound API query.

use curator_logging::{curator_debug, curator_warn};
use url::form_urlencoded;

use crate::filter::{FilterState, ResourceKind, TAG_SEPARATOR};

const KEY_CATEGORY: &str = "category";
const KEY_SEARCH: &str = "q";
const KEY_RESOURCE_TYPE: &str = "resourceType";
const KEY_TAG: &str = "tag";

/// Parses an address bar query string (leading `?` optional) into filters.
///
/// Unknown keys are ignored and malformed values leave their field unset.
/// Repeated `tag` keys are merged; for the other keys the last value wins.
pub fn parse_query(query: &str) -> FilterState {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut state = FilterState::default();

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            KEY_SEARCH => state.search_text = non_empty(&value),
            KEY_CATEGORY => state.category = non_empty(&value),
            KEY_TAG => state.tags.extend(value.split(TAG_SEPARATOR)),
            KEY_RESOURCE_TYPE => {
                state.resource_type = ResourceKind::from_param(&value);
                if state.resource_type.is_none() && !value.is_empty() {
                    curator_warn!("Ignoring unsupported resourceType {:?} in url", value);
                }
            }
            other => curator_debug!("Ignoring unknown query key {:?}", other),
        }
    }

    state
}

/// Builds the canonical address for `state` under `base_path`.
///
/// Keys are emitted in a fixed order and only when the field is set, so the
/// same filters always produce the same string.
pub fn serialize_to_url(state: &FilterState, base_path: &str) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    if let Some(category) = &state.category {
        serializer.append_pair(KEY_CATEGORY, category);
    }
    if let Some(text) = &state.search_text {
        serializer.append_pair(KEY_SEARCH, text);
    }
    if let Some(kind) = state.resource_type {
        serializer.append_pair(KEY_RESOURCE_TYPE, kind.as_str());
    }
    if !state.tags.is_empty() {
        serializer.append_pair(KEY_TAG, &state.tags.joined());
    }

    let query = serializer.finish();
    if query.is_empty() {
        base_path.to_string()
    } else {
        format!("{base_path}?{query}")
    }
}

/// Ordered key/value pairs for `GET resources`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryParams(Vec<(&'static str, String)>);

impl QueryParams {
    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.0
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.0.iter().map(|(key, value)| (*key, value.as_str())))
            .finish()
    }
}

/// Outbound API parameters: `type`, `category`, `tags`, `q`, absent fields omitted.
pub fn to_query_params(state: &FilterState) -> QueryParams {
    let mut pairs = Vec::with_capacity(4);
    if let Some(kind) = state.resource_type {
        pairs.push(("type", kind.as_str().to_string()));
    }
    if let Some(category) = &state.category {
        pairs.push(("category", category.clone()));
    }
    if !state.tags.is_empty() {
        pairs.push(("tags", state.tags.joined()));
    }
    if let Some(text) = &state.search_text {
        pairs.push(("q", text.clone()));
    }
    QueryParams(pairs)
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::TagSet;

    #[test]
    fn unfiltered_state_serializes_to_bare_path() {
        assert_eq!(serialize_to_url(&FilterState::default(), "/resources"), "/resources");
    }

    #[test]
    fn keys_are_emitted_in_fixed_order() {
        let state = FilterState {
            search_text: Some("heap sort".into()),
            tags: TagSet::from_joined("graphs,arrays"),
            resource_type: Some(ResourceKind::Article),
            category: Some("DSA".into()),
        };
        assert_eq!(
            serialize_to_url(&state, "/resources"),
            "/resources?category=DSA&q=heap+sort&resourceType=article&tag=graphs%2Carrays"
        );
    }

    #[test]
    fn api_params_rename_resource_type() {
        let state = FilterState {
            resource_type: Some(ResourceKind::Video),
            tags: TagSet::from_joined("arrays"),
            ..FilterState::default()
        };
        let params = to_query_params(&state);
        assert_eq!(params.get("type"), Some("video"));
        assert_eq!(params.get("resourceType"), None);
        assert_eq!(params.to_query_string(), "type=video&tags=arrays");
    }

    #[test]
    fn empty_values_and_unknown_keys_are_dropped() {
        let state = parse_query("?q=&category=&utm_source=mail&tag=");
        assert!(state.is_unfiltered());
    }

    #[test]
    fn leading_question_mark_is_optional() {
        assert_eq!(parse_query("category=DSA"), parse_query("?category=DSA"));
    }
}
