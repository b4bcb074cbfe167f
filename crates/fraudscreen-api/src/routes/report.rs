use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ReportFraudRequest {
    pub transaction_id: String,
    pub fraud_details: String,
}

#[derive(Serialize)]
pub struct ReportFraudResponse {
    pub transaction_id: String,
    pub reporting_acknowledged: bool,
    pub message: &'static str,
}

pub async fn report_fraud(
    State(state): State<AppState>,
    payload: Result<Json<ReportFraudRequest>, JsonRejection>,
) -> Result<Json<ReportFraudResponse>, ApiError> {
    let Json(req) = payload?;
    let record = state
        .screener
        .report(&req.transaction_id, &req.fraud_details)
        .await?;

    Ok(Json(ReportFraudResponse {
        transaction_id: record.transaction_id,
        reporting_acknowledged: true,
        message: "Fraud reported successfully",
    }))
}
