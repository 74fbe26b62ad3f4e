mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use linkcard::routes::router;
use std::sync::Arc;

#[tokio::test]
async fn test_health_ok() {
    let state = common::create_test_state();
    common::create_test_link(&state, "https://example.org", None, None).await;

    let server = TestServer::new(router(state)).unwrap();
    let response = server.get("/health").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["checks"]["storage"]["status"], "ok");
    assert_eq!(
        body["checks"]["storage"]["message"],
        "Reachable, 1 links stored"
    );
}

#[tokio::test]
async fn test_health_storage_down() {
    let state = common::create_state_with(Arc::new(common::FailingRepository));
    let server = TestServer::new(router(state)).unwrap();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"]["storage"]["status"], "error");
}
