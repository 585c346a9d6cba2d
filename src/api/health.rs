use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health-check", get(health_check))
}

/// Liveness probe. No auth, no side effects.
async fn health_check() -> Json<Value> {
    Json(json!({ "message": "OK" }))
}
