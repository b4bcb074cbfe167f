use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use fraudscreen_core::models::metrics::{EvaluationMetrics, TimeRange};
use jiff::Timestamp;
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct MetricsQuery {
    #[serde(default)]
    pub range: TimeRange,
}

pub async fn evaluation_metrics(
    State(state): State<AppState>,
    query: Result<Query<MetricsQuery>, QueryRejection>,
) -> Result<Json<EvaluationMetrics>, ApiError> {
    let Query(query) = query?;
    let records = state.store.list().await?;
    Ok(Json(EvaluationMetrics::compute(
        &records,
        query.range,
        Timestamp::now(),
    )))
}
