use fraudscreen_core::models::decision::{DecisionRecord, FraudSource};
use jiff::Timestamp;
use sqlx::FromRow;

use crate::error::StorageError;

/// Column-level view of `fraud_detection`. Timestamps are stored as
/// RFC 3339 text and the source as its lowercase name.
#[derive(Debug, FromRow)]
pub(crate) struct DecisionRow {
    pub transaction_id: String,
    pub amount: f64,
    pub payer_id: String,
    pub payee_id: String,
    pub payment_mode: String,
    pub transaction_channel: String,
    pub payment_gateway_bank: Option<String>,
    pub timestamp: String,
    pub is_fraud_predicted: bool,
    pub is_fraud_reported: bool,
    pub fraud_source: String,
    pub fraud_reason: String,
    pub fraud_score: f64,
}

impl TryFrom<DecisionRow> for DecisionRecord {
    type Error = StorageError;

    fn try_from(row: DecisionRow) -> Result<Self, Self::Error> {
        let invalid = |reason: String| StorageError::InvalidRow {
            transaction_id: row.transaction_id.clone(),
            reason,
        };
        let timestamp = row
            .timestamp
            .parse::<Timestamp>()
            .map_err(|e| invalid(format!("timestamp: {e}")))?;
        let fraud_source = row
            .fraud_source
            .parse::<FraudSource>()
            .map_err(|e| invalid(e.to_string()))?;

        Ok(DecisionRecord {
            transaction_id: row.transaction_id,
            amount: row.amount,
            payer_id: row.payer_id,
            payee_id: row.payee_id,
            payment_mode: row.payment_mode,
            transaction_channel: row.transaction_channel,
            payment_gateway_bank: row.payment_gateway_bank,
            timestamp,
            is_fraud_predicted: row.is_fraud_predicted,
            is_fraud_reported: row.is_fraud_reported,
            fraud_source,
            fraud_reason: row.fraud_reason,
            fraud_score: row.fraud_score,
        })
    }
}
