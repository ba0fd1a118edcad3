mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use sqlx::SqlitePool;
use url_alias::api::routes::url_routes;

fn make_server(pool: SqlitePool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = url_routes().with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_delete_success() {
    let pool = common::create_test_pool().await;
    let server = make_server(pool.clone());

    common::create_test_link(&pool, "del1", "https://example.com").await;

    let response = server.delete("/del1").await;

    response.assert_status(StatusCode::NO_CONTENT);
    assert_eq!(common::count_links(&pool).await, 0);
}

#[tokio::test]
async fn test_delete_not_found() {
    let pool = common::create_test_pool().await;
    let server = make_server(pool);

    let response = server.delete("/missing").await;

    response.assert_status_not_found();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_delete_twice() {
    let pool = common::create_test_pool().await;
    let server = make_server(pool.clone());

    common::create_test_link(&pool, "twice", "https://example.com").await;

    server.delete("/twice").await.assert_status(StatusCode::NO_CONTENT);
    server.delete("/twice").await.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_then_recreate_alias() {
    let pool = common::create_test_pool().await;
    let server = make_server(pool.clone());

    common::create_test_link(&pool, "again", "https://example.com/old").await;
    server.delete("/again").await.assert_status(StatusCode::NO_CONTENT);

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://example.com/new", "alias": "again" }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let redirect = server.get("/again").await;
    assert_eq!(redirect.header("location"), "https://example.com/new");
}
