use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use super::AppState;

pub(crate) mod auth;

/// Every route the service answers, with state applied.
pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .nest("/api/auth", auth::router())
        .with_state(state)
}

async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
