mod common;

use axum::ServiceExt;
use axum::extract::Request;
use axum::http::StatusCode;
use axum_test::TestServer;
use linkcard::api::middleware::rate_limit::CREATE_BURST;
use linkcard::routes::app_router;
use serde_json::json;
use std::net::SocketAddr;

/// Serves the production router over a real socket, so the rate limiter sees
/// the peer address.
fn server(state: linkcard::AppState) -> TestServer {
    let app = ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(
        app_router(state),
    );
    TestServer::builder().http_transport().build(app).unwrap()
}

#[tokio::test]
async fn test_full_stack_create_and_preview() {
    let state = common::create_test_state();
    let server = server(state.clone());

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.org", "title": "Full stack" }))
        .await;
    response.assert_status_ok();
    let code = response.json::<serde_json::Value>()["code"]
        .as_str()
        .unwrap()
        .to_string();

    let preview = server.get(&format!("/s/{}", code)).await;
    preview.assert_status_ok();
    assert!(preview.text().contains("Full stack"));

    let form = server
        .post("/shorten")
        .form(&[("url", "https://example.com")])
        .await;
    form.assert_status_ok();
    assert!(form.text().contains(common::BASE_URL));

    assert_eq!(common::link_count(&state).await, 2);
}

#[tokio::test]
async fn test_creation_over_burst_is_throttled() {
    let state = common::create_test_state();
    let server = server(state.clone());

    let mut created = 0;
    let mut throttled = false;
    for _ in 0..CREATE_BURST * 2 {
        let response = server
            .post("/api/shorten")
            .json(&json!({ "url": "https://example.org" }))
            .await;

        match response.status_code() {
            StatusCode::OK => created += 1,
            StatusCode::TOO_MANY_REQUESTS => {
                throttled = true;
                break;
            }
            other => panic!("unexpected status {other}"),
        }
    }

    assert!(throttled, "no 429 after {created} creations");
    assert!(created >= CREATE_BURST);
    assert_eq!(common::link_count(&state).await, i64::from(created));

    // Lookups are not throttled.
    let code = {
        let link = common::create_test_link(&state, "https://example.net", None, None).await;
        link.code().to_string()
    };
    server
        .get(&format!("/api/link/{}", code))
        .await
        .assert_status_ok();
}
