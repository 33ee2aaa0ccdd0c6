use axum::Json;
use serde_json::{Value, json};

pub async fn home() -> Json<Value> {
    Json(json!({ "status": "up", "health": "/healthz", "ui": "/ui/chat" }))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "ok": true }))
}
