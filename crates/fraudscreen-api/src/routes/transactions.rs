use axum::Json;
use axum::extract::{Path, State};
use fraudscreen_core::models::decision::{Decision, DecisionRecord};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_transactions(
    State(state): State<AppState>,
) -> Result<Json<Vec<DecisionRecord>>, ApiError> {
    Ok(Json(state.store.list().await?))
}

pub async fn get_transaction(
    State(state): State<AppState>,
    Path(transaction_id): Path<String>,
) -> Result<Json<Decision>, ApiError> {
    let record = state.store.get(&transaction_id).await?;
    Ok(Json(Decision::from(record)))
}
