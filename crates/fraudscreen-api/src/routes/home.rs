use axum::Json;
use serde_json::{Value, json};

pub async fn home() -> Json<Value> {
    Json(json!({ "message": "Welcome to the Fraud Detection API" }))
}
