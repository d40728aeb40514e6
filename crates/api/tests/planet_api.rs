//! HTTP-level integration tests for the `/planets` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_empty, post_json, post_raw, put_json};
use serde_json::json;
use sqlx::PgPool;

async fn create_tatooine(pool: &PgPool) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/planets",
        json!({"name": "Tatooine", "diameter": 10465, "climate": "arid"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_planet_returns_201_with_fields(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/planets",
        json!({"name": "Tatooine", "diameter": 10465, "climate": "arid"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].is_number());
    assert_eq!(json["name"], "Tatooine");
    assert_eq!(json["diameter"], 10465);
    assert_eq!(json["climate"], "arid");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn created_planet_is_returned_unchanged_by_get(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/planets",
            json!({"name": "Tatooine", "diameter": 10465, "climate": "arid"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/planets/{id}")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_planet_with_only_name_leaves_optionals_null(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/planets", json!({"name": "Dagobah"})).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["diameter"].is_null());
    assert!(json["climate"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_planet_without_body_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_empty(app, "/planets").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "No data provided");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_planet_with_empty_object_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/planets", json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_planet_without_name_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/planets", json!({"climate": "frozen"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_planet_with_blank_name_returns_validation_error(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/planets", json!({"name": "  "})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_planet_with_malformed_json_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_raw(app, "/planets", "{\"name\": ").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_planets_returns_all(pool: PgPool) {
    create_tatooine(&pool).await;
    let app = common::build_test_app(pool.clone());
    post_json(app, "/planets", json!({"name": "Hoth"})).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/planets").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Tatooine", "Hoth"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_nonexistent_planet_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/planets/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["error"],
        "Planet with id 999999 not found"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_planet_merges_fields(pool: PgPool) {
    let id = create_tatooine(&pool).await;

    let app = common::build_test_app(pool);
    let response = put_json(app, &format!("/planets/{id}"), json!({"diameter": 11000})).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], id);
    assert_eq!(json["name"], "Tatooine");
    assert_eq!(json["diameter"], 11000);
    assert_eq!(json["climate"], "arid");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_nonexistent_planet_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(app, "/planets/999999", json!({"name": "Nowhere"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_planet_returns_message_then_404(pool: PgPool) {
    let id = create_tatooine(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/planets/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Planet deleted");

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/planets/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_nonexistent_planet_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/planets/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_planet_with_empty_object_returns_row_unchanged(pool: PgPool) {
    let id = create_tatooine(&pool).await;

    let app = common::build_test_app(pool);
    let response = put_json(app, &format!("/planets/{id}"), json!({})).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Tatooine");
    assert_eq!(json["diameter"], 10465);
    assert_eq!(json["climate"], "arid");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_nonexistent_planet_with_empty_object_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(app, "/planets/999999", json!({})).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_planet_with_null_clears_nullable_fields(pool: PgPool) {
    let id = create_tatooine(&pool).await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/planets/{id}"),
        json!({"climate": null, "diameter": null}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Tatooine");
    assert!(json["climate"].is_null());
    assert!(json["diameter"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_numeric_planet_id_returns_json_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/planets/abc").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("application/json"));
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");

    let app = common::build_test_app(pool);
    let response = put_json(app, "/planets/abc", json!({"name": "Hoth"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn trailing_slash_routes_like_bare_path(pool: PgPool) {
    let id = create_tatooine(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/planets/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/planets/{id}/")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "Tatooine");
}
