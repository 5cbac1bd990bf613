use curator_core::{
    apply_update, parse_query, serialize_to_url, to_query_params, FilterPatch, FilterState,
    ResourceKind, TagSet,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    curator_logging::initialize_for_tests();
}

#[test]
fn category_and_comma_joined_tags_are_parsed() {
    init_logging();
    let state = parse_query("?category=DSA&tag=arrays,graphs");

    assert_eq!(
        state,
        FilterState {
            category: Some("DSA".to_string()),
            tags: TagSet::from_joined("arrays,graphs"),
            ..FilterState::default()
        }
    );
}

#[test]
fn unsupported_resource_type_is_left_unset() {
    init_logging();
    let state = parse_query("?resourceType=foo&category=Web");

    assert_eq!(state.resource_type, None);
    assert_eq!(state.category.as_deref(), Some("Web"));
}

#[test]
fn repeated_tag_keys_are_merged() {
    init_logging();
    let state = parse_query("tag=arrays&tag=graphs,arrays");
    assert_eq!(state.tags.joined(), "arrays,graphs");
}

#[test]
fn serialized_url_parses_back_to_same_filters() {
    init_logging();
    let samples = vec![
        FilterState::default(),
        FilterState {
            search_text: Some("c++ & rust?".to_string()),
            ..FilterState::default()
        },
        FilterState {
            search_text: Some("react hooks".to_string()),
            tags: TagSet::from_joined("frontend,react"),
            resource_type: Some(ResourceKind::Video),
            category: Some("Web Development".to_string()),
        },
        FilterState {
            tags: TagSet::from_joined("graphs,arrays,dp"),
            resource_type: Some(ResourceKind::Article),
            ..FilterState::default()
        },
    ];

    for state in samples {
        let url = serialize_to_url(&state, "/resources");
        let query = url.split_once('?').map(|(_, query)| query).unwrap_or("");
        assert_eq!(parse_query(query), state, "round trip through {url}");
    }
}

#[test]
fn removing_a_tag_rewrites_the_url() {
    init_logging();
    let state = parse_query("?tag=arrays,graphs");
    let mut tags = state.tags.clone();
    tags.remove("graphs");

    let next = apply_update(&state, FilterPatch::tags(tags));

    assert_eq!(next.tags.joined(), "arrays");
    assert_eq!(serialize_to_url(&next, "/resources"), "/resources?tag=arrays");
}

#[test]
fn same_filters_give_same_url_and_params() {
    init_logging();
    let state = parse_query("?q=react&resourceType=video&category=Web");

    assert_eq!(
        serialize_to_url(&state, "/resources"),
        serialize_to_url(&state.clone(), "/resources")
    );
    assert_eq!(
        to_query_params(&state).to_query_string(),
        "type=video&category=Web&q=react"
    );
}
