mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use linkcard::api::routes::create_routes;
use linkcard::utils::code_generator::ALPHABET;
use serde_json::json;
use std::sync::Arc;

fn server(state: linkcard::AppState) -> TestServer {
    let app = axum::Router::new()
        .nest("/api", create_routes())
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_api_shorten_success() {
    let state = common::create_test_state();
    let server = server(state.clone());

    let response = server
        .post("/api/shorten")
        .json(&json!({
            "url": "https://example.org",
            "title": "T",
            "description": "D"
        }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let code = body["code"].as_str().unwrap();
    assert_eq!(code.len(), 6);
    assert!(code.bytes().all(|b| ALPHABET.contains(&b)));
    assert_eq!(body["url"], "https://example.org");
    assert_eq!(
        body["short_url"],
        format!("{}/s/{}", common::BASE_URL, code)
    );

    let link = state.link_service.resolve(code).await.unwrap();
    assert_eq!(link.title, "T");
    assert_eq!(link.description, "D");
}

#[tokio::test]
async fn test_api_shorten_missing_url() {
    let state = common::create_test_state();
    let server = server(state.clone());

    let response = server
        .post("/api/shorten")
        .json(&json!({ "title": "No URL" }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
    assert_eq!(body["error"]["message"], "URL is required");
    assert_eq!(common::link_count(&state).await, 0);
}

#[tokio::test]
async fn test_api_shorten_null_url() {
    let state = common::create_test_state();
    let server = server(state.clone());

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": null }))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
    assert_eq!(body["error"]["message"], "URL is required");
    assert_eq!(common::link_count(&state).await, 0);
}

#[tokio::test]
async fn test_api_shorten_malformed_json() {
    let state = common::create_test_state();
    let server = server(state.clone());

    let response = server
        .post("/api/shorten")
        .bytes(r#"{"url": "https://example.org""#.into())
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
    assert_eq!(body["error"]["message"], "Invalid JSON body");
    assert!(body["error"]["details"]["reason"].is_string());
    assert_eq!(common::link_count(&state).await, 0);
}

#[tokio::test]
async fn test_api_shorten_wrong_field_type() {
    let state = common::create_test_state();
    let server = server(state.clone());

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": 42 }))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
    assert_eq!(common::link_count(&state).await, 0);
}

#[tokio::test]
async fn test_api_shorten_missing_content_type() {
    let state = common::create_test_state();
    let server = server(state.clone());

    let response = server
        .post("/api/shorten")
        .text(r#"{"url": "https://example.org"}"#)
        .await;

    response.assert_status_bad_request();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
    assert_eq!(common::link_count(&state).await, 0);
}

#[tokio::test]
async fn test_api_shorten_invalid_url() {
    let state = common::create_test_state();
    let server = server(state.clone());

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "not-a-url" }))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
    assert_eq!(common::link_count(&state).await, 0);
}

#[tokio::test]
async fn test_api_shorten_rejects_non_web_scheme() {
    let state = common::create_test_state();
    let server = server(state.clone());

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "javascript:alert(1)" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(common::link_count(&state).await, 0);
}

#[tokio::test]
async fn test_api_shorten_invalid_image() {
    let state = common::create_test_state();
    let server = server(state.clone());

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.org", "image": "not an image" }))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<serde_json::Value>();
    assert!(body["error"]["details"]["fields"]["image"].is_array());
    assert_eq!(common::link_count(&state).await, 0);
}

#[tokio::test]
async fn test_api_shorten_script_image() {
    let state = common::create_test_state();
    let server = server(state.clone());

    let response = server
        .post("/api/shorten")
        .json(&json!({
            "url": "https://example.org",
            "image": "data:text/html,<script>1</script>"
        }))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<serde_json::Value>();
    assert_eq!(
        body["error"]["details"]["fields"]["image"][0],
        "Image must be an HTTP or HTTPS URL"
    );
    assert_eq!(common::link_count(&state).await, 0);
}

#[tokio::test]
async fn test_api_shorten_storage_failure_hides_detail() {
    let state = common::create_state_with(Arc::new(common::FailingRepository));
    let server = server(state);

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.org" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "storage_error");
    assert!(!response.text().contains("connection refused"));
}

#[tokio::test]
async fn test_api_shorten_exhausted_code_space() {
    let state = common::create_state_with(Arc::new(common::AlwaysConflictRepository));
    let server = server(state);

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.org" }))
        .await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "code_space_exhausted");
    assert_eq!(body["error"]["details"]["attempts"], 10);
}
