//! End-to-end checks against a live PostgreSQL.
//!
//! Configure the connection the same way as the server (`DATABASE_URL` or the
//! `DB_*` variables, `.env` honored) and run with `cargo test -- --ignored`.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use chrono::{DateTime, Utc};
use posts_api::{app, connect, AppConfig, AppState, PgGateway};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

const BASE: &str = "/api/posts";
const SCHEMA: &str = include_str!("../sql/posts.sql");

async fn setup() -> Router {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env().expect("config");
    let pool = connect(&config.database).await.expect("database reachable");
    sqlx::raw_sql(SCHEMA).execute(&pool).await.expect("posts table");
    app(AppState::new(Arc::new(PgGateway::new(pool))), BASE)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            req = req.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    let resp = app.clone().oneshot(req.body(body).unwrap()).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

fn ts(v: &Value) -> DateTime<Utc> {
    v.as_str().unwrap().parse().unwrap()
}

#[tokio::test]
#[ignore = "needs a running PostgreSQL"]
async fn create_read_update_against_postgres() {
    let app = setup().await;

    let (status, body) = send(&app, Method::POST, BASE, Some(json!({ "title": "A", "content": "B" }))).await;
    assert_eq!(status, StatusCode::OK);
    let created = body["post"].clone();
    let id = created["id"].as_i64().expect("numeric id");
    assert_eq!(ts(&created["created_at"]), ts(&created["updated_at"]));

    let (status, body) = send(&app, Method::GET, &format!("{}/{}", BASE, id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["post"]["title"], "A");
    assert_eq!(body["post"]["content"], "B");

    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("{}/{}", BASE, id),
        Some(json!({ "title": "A2", "content": "B2" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["post"]["id"], id);
    assert_eq!(body["post"]["title"], "A2");
    assert_eq!(body["post"]["created_at"], created["created_at"]);
    assert!(ts(&body["post"]["updated_at"]) >= ts(&created["updated_at"]));
}

#[tokio::test]
#[ignore = "needs a running PostgreSQL"]
async fn list_is_newest_first_against_postgres() {
    let app = setup().await;
    for title in ["first", "second"] {
        let (status, _) = send(&app, Method::POST, BASE, Some(json!({ "title": title, "content": "c" }))).await;
        assert_eq!(status, StatusCode::OK);
    }
    let (status, body) = send(&app, Method::GET, BASE, None).await;
    assert_eq!(status, StatusCode::OK);
    let posts = body["posts"].as_array().unwrap();
    assert!(posts.len() >= 2);
    for pair in posts.windows(2) {
        assert!(ts(&pair[0]["created_at"]) >= ts(&pair[1]["created_at"]));
    }
}

#[tokio::test]
#[ignore = "needs a running PostgreSQL"]
async fn missing_ids_are_404_and_bad_ids_500_against_postgres() {
    let app = setup().await;
    let (status, _) = send(&app, Method::GET, &format!("{}/{}", BASE, i32::MAX), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::PATCH,
        &format!("{}/{}", BASE, i32::MAX),
        Some(json!({ "title": "x", "content": "y" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::GET, &format!("{}/abc", BASE), None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to retrieve post");
}
