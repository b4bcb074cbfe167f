use std::fmt;
use std::str::FromStr;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::transaction::Transaction;
use crate::error::CoreError;
use crate::verdict::Verdict;

/// Which mechanism produced a predicted verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum FraudSource {
    Rule,
    Model,
    None,
}

impl FraudSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rule => "rule",
            Self::Model => "model",
            Self::None => "none",
        }
    }
}

impl fmt::Display for FraudSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FraudSource {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rule" => Ok(Self::Rule),
            "model" => Ok(Self::Model),
            "none" => Ok(Self::None),
            other => Err(CoreError::invalid("fraud_source", other)),
        }
    }
}

/// One persisted row: the transaction plus its fraud verdict and
/// correction state.
///
/// Only `is_fraud_reported` and `fraud_reason` change after creation, and
/// only through a correction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DecisionRecord {
    pub transaction_id: String,
    pub amount: f64,
    pub payer_id: String,
    pub payee_id: String,
    pub payment_mode: String,
    pub transaction_channel: String,
    pub payment_gateway_bank: Option<String>,
    pub timestamp: Timestamp,
    pub is_fraud_predicted: bool,
    pub is_fraud_reported: bool,
    pub fraud_source: FraudSource,
    pub fraud_reason: String,
    pub fraud_score: f64,
}

impl DecisionRecord {
    pub fn new(txn: Transaction, verdict: Verdict, fraud_score: f64) -> Self {
        Self {
            transaction_id: txn.transaction_id,
            amount: txn.amount,
            payer_id: txn.payer_id,
            payee_id: txn.payee_id,
            payment_mode: txn.payment_mode,
            transaction_channel: txn.transaction_channel,
            payment_gateway_bank: txn.payment_gateway_bank,
            timestamp: txn.timestamp,
            is_fraud_predicted: verdict.is_fraud,
            is_fraud_reported: false,
            fraud_source: verdict.source,
            fraud_reason: verdict.reason,
            fraud_score,
        }
    }

    pub fn fraud_verdict(&self) -> &'static str {
        if self.is_fraud_predicted {
            "FRAUD"
        } else {
            "NOT FRAUD"
        }
    }
}

/// A decision record as returned to API clients, with the display verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Decision {
    #[serde(flatten)]
    pub record: DecisionRecord,
    pub fraud_verdict: String,
}

impl From<DecisionRecord> for Decision {
    fn from(record: DecisionRecord) -> Self {
        let fraud_verdict = record.fraud_verdict().to_string();
        Self {
            record,
            fraud_verdict,
        }
    }
}
