//! Health route plus the cross-cutting middleware (request ids, CORS).

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get};
use sqlx::PgPool;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// /health
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_health_on_empty_catalog(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["db_healthy"], true);
    assert_eq!(json["films"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_health_reports_film_count(pool: PgPool) {
    common::seed_films(&pool, 3).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/health").await).await;

    assert_eq!(json["films"], 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_health_degrades_without_catalog_table(pool: PgPool) {
    sqlx::query("DROP TABLE content.film_work CASCADE")
        .execute(&pool)
        .await
        .unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], true);
    assert!(json["films"].is_null());
}

// ---------------------------------------------------------------------------
// Request ids
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_catalog_response_gets_generated_request_id(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/movies").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("x-request-id missing");
    assert!(request_id.to_str().unwrap().parse::<uuid::Uuid>().is_ok());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_caller_request_id_is_echoed(pool: PgPool) {
    let app = common::build_test_app(pool);
    let request = Request::builder()
        .uri("/api/v1/movies")
        .header("x-request-id", "catalog-trace-42")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "catalog-trace-42");
}

// ---------------------------------------------------------------------------
// CORS
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_preflight_allows_only_reads(pool: PgPool) {
    let app = common::build_test_app(pool);
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v1/movies")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "GET")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert_eq!(
        headers["access-control-allow-origin"],
        "http://localhost:5173"
    );
    let allow_methods = headers["access-control-allow-methods"].to_str().unwrap();
    assert!(allow_methods.contains("GET"), "got: {allow_methods}");
    assert!(!allow_methods.contains("POST"), "got: {allow_methods}");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_cross_origin_list_carries_allow_origin(pool: PgPool) {
    let app = common::build_test_app(pool);
    let request = Request::builder()
        .uri("/api/v1/movies")
        .header("Origin", "http://localhost:5173")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "http://localhost:5173"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_path_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    assert_eq!(get(app, "/api/v1/films").await.status(), StatusCode::NOT_FOUND);
}
