//! HTTP surface tests using warp's test harness

mod common;

use blogsmith::models::ResponseBody;
use blogsmith::routes::{configure_routes, MAX_BODY_BYTES};
use common::{service, RecordingStore, StubGenerator};
use serde_json::{json, Value};
use warp::http::StatusCode;

fn body_json(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap()
}

#[tokio::test]
async fn test_post_blog_success() {
    let store = RecordingStore::new();
    let routes = configure_routes(service(StubGenerator::replying("Lorem ipsum"), store.clone()));

    let resp = warp::test::request()
        .method("POST")
        .path("/api/v1/blogs")
        .header("content-type", "application/json")
        .json(&json!({
            "blogTopic": "Machine Learning",
            "level": "Expert",
            "context": "The future of AI in healthcare."
        }))
        .reply(&routes)
        .await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp.body()),
        json!({
            "blog": "Lorem ipsum",
            "message": "Content successfully generated and uploaded."
        })
    );
    assert_eq!(store.calls(), 1);
}

#[tokio::test]
async fn test_post_blog_missing_field() {
    let generator = StubGenerator::replying("unused");
    let routes = configure_routes(service(generator.clone(), RecordingStore::new()));

    let resp = warp::test::request()
        .method("POST")
        .path("/api/v1/blogs")
        .json(&json!({ "level": "Expert", "context": "x" }))
        .reply(&routes)
        .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp.body()), json!({ "error": "blogTopic is required" }));
    assert_eq!(generator.calls(), 0);
}

#[tokio::test]
async fn test_post_blog_inference_failure() {
    let routes = configure_routes(service(StubGenerator::failing(), RecordingStore::new()));

    let resp = warp::test::request()
        .method("POST")
        .path("/api/v1/blogs")
        .json(&json!({ "blogTopic": "Rust", "level": "Beginner", "context": "Ownership" }))
        .reply(&routes)
        .await;

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body: ResponseBody = serde_json::from_slice(resp.body()).unwrap();
    assert_eq!(
        body,
        ResponseBody::error("Failed to generate content. Please try again.")
    );
}

#[tokio::test]
async fn test_post_blog_storage_failure() {
    let routes = configure_routes(service(
        StubGenerator::replying("Lorem ipsum"),
        RecordingStore::failing(),
    ));

    let resp = warp::test::request()
        .method("POST")
        .path("/api/v1/blogs")
        .json(&json!({ "blogTopic": "Rust", "level": "Beginner", "context": "Ownership" }))
        .reply(&routes)
        .await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(resp.body());
    assert!(body.get("message").is_none());
    assert_eq!(body["error"], "Failed to upload generated content to storage.");
}

#[tokio::test]
async fn test_oversized_body_rejected() {
    let generator = StubGenerator::replying("unused");
    let routes = configure_routes(service(generator.clone(), RecordingStore::new()));

    let resp = warp::test::request()
        .method("POST")
        .path("/api/v1/blogs")
        .body(vec![b'a'; MAX_BODY_BYTES as usize + 1])
        .reply(&routes)
        .await;

    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert!(body_json(resp.body())["error"].is_string());
    assert_eq!(generator.calls(), 0);
}

#[tokio::test]
async fn test_health() {
    let routes = configure_routes(service(StubGenerator::replying("unused"), RecordingStore::new()));

    let resp = warp::test::request()
        .method("GET")
        .path("/health")
        .reply(&routes)
        .await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp.body()), json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_unknown_route_returns_json_error() {
    let routes = configure_routes(service(StubGenerator::replying("unused"), RecordingStore::new()));

    let resp = warp::test::request()
        .method("GET")
        .path("/api/v1/threads")
        .reply(&routes)
        .await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp.body()), json!({ "error": "Not found" }));
}

#[tokio::test]
async fn test_cors_header_on_response() {
    let routes = configure_routes(service(StubGenerator::replying("Lorem ipsum"), RecordingStore::new()));

    let resp = warp::test::request()
        .method("POST")
        .path("/api/v1/blogs")
        .header("origin", "https://blog.example.com")
        .json(&json!({ "blogTopic": "Rust", "level": "Beginner", "context": "Ownership" }))
        .reply(&routes)
        .await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("access-control-allow-origin"));
}
