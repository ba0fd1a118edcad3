mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use sqlx::SqlitePool;
use url_alias::api::routes::url_routes;

fn make_server(pool: SqlitePool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = url_routes().with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_redirect_success() {
    let pool = common::create_test_pool().await;
    let server = make_server(pool.clone());

    common::create_test_link(&pool, "abc123", "https://example.com/target").await;

    let response = server.get("/abc123").await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.header("location"),
        "https://example.com/target"
    );
}

#[tokio::test]
async fn test_redirect_keeps_url_unchanged() {
    let pool = common::create_test_pool().await;
    let server = make_server(pool.clone());

    let target = "https://Example.com/a/b?x=1&y=%20z#frag";
    common::create_test_link(&pool, "raw", target).await;

    let response = server.get("/raw").await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), target);
}

#[tokio::test]
async fn test_redirect_not_found() {
    let pool = common::create_test_pool().await;
    let server = make_server(pool);

    let response = server.get("/nonexistent").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["alias"], "nonexistent");
}

#[tokio::test]
async fn test_redirect_after_delete_not_found() {
    let pool = common::create_test_pool().await;
    let server = make_server(pool.clone());

    common::create_test_link(&pool, "gone", "https://example.com").await;
    server.delete("/gone").await.assert_status(StatusCode::NO_CONTENT);

    server.get("/gone").await.assert_status_not_found();
}
