#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use chrono::NaiveDate;
use http_body_util::BodyExt;
use movies_core::film::{FilmworkType, PersonRole};
use movies_core::types::DbId;
use movies_db::models::filmwork::CreateFilmwork;
use movies_db::models::genre::CreateGenre;
use movies_db::models::person::CreatePerson;
use movies_db::repositories::{FilmworkRepo, GenreRepo, PersonRepo};
use sqlx::PgPool;
use tower::ServiceExt;

use movies_api::config::ServerConfig;
use movies_api::router::build_app_router;
use movies_api::state::AppState;

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 5,
    }
}

/// Build the full application router, with the production middleware stack,
/// over the given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn send(app: Router, method: Method, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub async fn seed_film(
    pool: &PgPool,
    title: &str,
    rating: Option<f64>,
    creation_date: NaiveDate,
) -> DbId {
    let input = CreateFilmwork {
        title: title.to_string(),
        description: None,
        rating,
        film_type: FilmworkType::Movie,
        creation_date,
        file_path: None,
    };
    FilmworkRepo::create(pool, &input).await.unwrap().id
}

/// Insert `n` films titled `Film 000`, `Film 001`, ... so title order
/// equals insertion order.
pub async fn seed_films(pool: &PgPool, n: usize) -> Vec<DbId> {
    let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    let mut ids = Vec::with_capacity(n);
    for i in 0..n {
        ids.push(seed_film(pool, &format!("Film {i:03}"), None, date).await);
    }
    ids
}

pub async fn seed_genre(pool: &PgPool, film_id: DbId, name: &str) {
    let input = CreateGenre {
        name: name.to_string(),
        description: None,
    };
    let genre = GenreRepo::create(pool, &input).await.unwrap();
    FilmworkRepo::add_genre(pool, film_id, genre.id).await.unwrap();
}

pub async fn seed_person(pool: &PgPool, film_id: DbId, full_name: &str, role: PersonRole) {
    let input = CreatePerson {
        full_name: full_name.to_string(),
    };
    let person = PersonRepo::create(pool, &input).await.unwrap();
    FilmworkRepo::add_person(pool, film_id, person.id, role)
        .await
        .unwrap();
}

/// Sorted copy of a JSON string array, for order-insensitive comparison.
pub fn sorted_strings(value: &serde_json::Value) -> Vec<String> {
    let mut items: Vec<String> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect();
    items.sort();
    items
}
