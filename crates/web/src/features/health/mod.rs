use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up")
    ),
    tag = "health"
)]
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
