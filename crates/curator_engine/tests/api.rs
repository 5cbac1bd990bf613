use std::time::Duration;

use curator_core::{parse_query, to_query_params, ResourceKind};
use curator_engine::{DirectoryApi, FailureKind, HttpSettings, ReqwestApi};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn resource_body(id: &str, title: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "resourceType": "article",
        "categoryName": "DSA",
        "url": format!("https://example.com/{id}"),
        "isPublished": true,
        "createdAt": "2025-03-01T08:00:00Z",
        "updatedAt": "2025-03-01T08:00:00Z",
        "tags": ["arrays", "graphs"],
        "categories": { "id": 1, "name": "DSA" },
        "description": null,
        "upvoteCount": 7,
        "language": "english",
        "hasUpvoted": false,
        "isBookmarked": true,
        "bookmarkCount": 2,
        "categoryId": "1",
        "status": "approved"
    })
}

fn api(server: &MockServer) -> ReqwestApi {
    ReqwestApi::new(&format!("{}/api", server.uri()), HttpSettings::default()).expect("api")
}

#[tokio::test]
async fn resources_query_carries_filter_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/resources"))
        .and(query_param("type", "article"))
        .and(query_param("category", "DSA"))
        .and(query_param("tags", "arrays,graphs"))
        .and(query_param("q", "two pointers"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([resource_body("r1", "Two pointers")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let filters =
        parse_query("?category=DSA&tag=arrays,graphs&resourceType=article&q=two+pointers");
    let resources = api(&server)
        .resources(&to_query_params(&filters))
        .await
        .expect("resources");

    assert_eq!(resources.len(), 1);
    assert_eq!(resources[0].title, "Two pointers");
    assert_eq!(resources[0].resource_type, ResourceKind::Article);
    assert_eq!(resources[0].bookmark_count, Some(2));
}

#[tokio::test]
async fn unfiltered_query_sends_no_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/resources"))
        .and(query_param_is_missing("type"))
        .and(query_param_is_missing("q"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&server)
        .await;

    let resources = api(&server)
        .resources(&to_query_params(&parse_query("")))
        .await
        .expect("resources");
    assert!(resources.is_empty());
}

#[tokio::test]
async fn wrapped_and_bare_list_bodies_both_decode() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "id": 1, "name": "arrays" }, { "id": 2, "name": "graphs" }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{ "id": 9, "name": "Web" }])),
        )
        .mount(&server)
        .await;

    let api = api(&server);
    let tags = api.tags().await.expect("tags");
    let categories = api.categories().await.expect("categories");

    assert_eq!(
        tags.iter().map(|t| t.name.as_str()).collect::<Vec<_>>(),
        vec!["arrays", "graphs"]
    );
    assert_eq!(categories[0].name, "Web");
}

#[tokio::test]
async fn single_resource_is_fetched_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/resources/r%2042"))
        .respond_with(ResponseTemplate::new(200).set_body_json(resource_body("r 42", "Heaps")))
        .mount(&server)
        .await;

    let resource = api(&server).resource("r 42").await.expect("resource");
    assert_eq!(resource.id, "r 42");
    assert!(resource.is_bookmarked);
}

#[tokio::test]
async fn http_errors_are_reported_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/resources"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let err = api(&server)
        .resources(&to_query_params(&parse_query("q=rust")))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(503));
}

#[tokio::test]
async fn malformed_body_is_a_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = api(&server).categories().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn slow_responses_time_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!([])),
        )
        .mount(&server)
        .await;

    let settings = HttpSettings {
        request_timeout: Duration::from_millis(50),
        ..HttpSettings::default()
    };
    let api = ReqwestApi::new(&format!("{}/api", server.uri()), settings).expect("api");

    let err = api.tags().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn oversized_bodies_are_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[{\"id\":1,\"name\":\"x\"}]"))
        .mount(&server)
        .await;

    let settings = HttpSettings {
        max_bytes: 10,
        ..HttpSettings::default()
    };
    let api = ReqwestApi::new(&server.uri(), settings).expect("api");

    let err = api.tags().await.unwrap_err();
    assert!(matches!(
        err.kind,
        FailureKind::TooLarge { max_bytes: 10, .. }
    ));
}

#[test]
fn invalid_base_url_is_rejected() {
    let err = ReqwestApi::new("not a url", HttpSettings::default()).unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
