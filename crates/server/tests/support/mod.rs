#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use migration::MigratorTrait;
use serde_json::Value;
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use server::routes;
use server::state::AppState;
use service::customer::repository::mock::MockCustomerRepository;
use service::user::repository::mock::MockUserRepository;
use service::user::UserConfig;

/// Router over in-memory mock repositories.
pub fn mock_app() -> Router {
    let state = AppState::new(
        Arc::new(MockUserRepository::default()),
        Arc::new(MockCustomerRepository::default()),
        UserConfig::default(),
    );
    routes::build_router(state, CorsLayer::very_permissive())
}

/// Router over a freshly migrated in-memory SQLite database.
pub async fn sqlite_app() -> anyhow::Result<Router> {
    let db = models::db::connect_in_memory().await?;
    migration::Migrator::up(&db, None).await?;
    let state = AppState::from_db(db, UserConfig::default());
    Ok(routes::build_router(state, CorsLayer::very_permissive()))
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json)?))?,
        None => builder.body(Body::empty())?,
    };
    let resp = app.clone().oneshot(req).await?;
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, value))
}
