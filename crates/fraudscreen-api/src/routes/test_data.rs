use axum::Json;
use axum::extract::State;
use fraudscreen_core::test_data::DEFAULT_COUNT;

use crate::error::ApiError;
use crate::screening::TestDataSummary;
use crate::state::AppState;

/// Development helper: wipes the table and fills it with synthetic data.
pub async fn generate_test_data(
    State(state): State<AppState>,
) -> Result<Json<TestDataSummary>, ApiError> {
    let summary = state.screener.generate_test_data(DEFAULT_COUNT).await?;
    Ok(Json(summary))
}
