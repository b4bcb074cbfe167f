use std::collections::BTreeMap;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use fraudscreen_core::models::decision::Decision;
use fraudscreen_core::models::transaction::TransactionPayload;
use serde_json::Value;

use crate::error::ApiError;
use crate::screening::UploadSummary;
use crate::state::AppState;

pub async fn detect_fraud(
    State(state): State<AppState>,
    payload: Result<Json<TransactionPayload>, JsonRejection>,
) -> Result<Json<Decision>, ApiError> {
    let Json(payload) = payload?;
    let decision = state.screener.detect(payload).await?;
    Ok(Json(decision))
}

pub async fn detect_fraud_batch(
    State(state): State<AppState>,
    payload: Result<Json<Vec<TransactionPayload>>, JsonRejection>,
) -> Result<Json<BTreeMap<String, Decision>>, ApiError> {
    let Json(payloads) = payload?;
    let results = state.screener.detect_batch(payloads).await?;
    Ok(Json(results))
}

/// Lenient bulk intake. Only a body that is not a JSON array fails the
/// request; bad items are skipped.
pub async fn upload_transactions(
    State(state): State<AppState>,
    payload: Result<Json<Vec<Value>>, JsonRejection>,
) -> Result<Json<UploadSummary>, ApiError> {
    let Json(items) = payload?;
    Ok(Json(state.screener.upload(items).await))
}
