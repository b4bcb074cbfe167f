//! Deterministic rule checks applied before scoring.
//!
//! Rules run in a fixed order and the first match wins; reasons are never
//! combined.

use serde::{Deserialize, Serialize};

use crate::models::transaction::Transaction;

pub const DEFAULT_HIGH_AMOUNT_THRESHOLD: f64 = 10_000.0;
pub const DEFAULT_RISKY_PAYER_PREFIX: &str = "RISK_";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleHit {
    HighAmount,
    RiskyPayer,
}

impl RuleHit {
    pub fn reason(self) -> &'static str {
        match self {
            Self::HighAmount => "High amount",
            Self::RiskyPayer => "Risky payer identified",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Amounts strictly above this are flagged.
    pub high_amount_threshold: f64,
    pub risky_payer_prefix: String,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            high_amount_threshold: DEFAULT_HIGH_AMOUNT_THRESHOLD,
            risky_payer_prefix: DEFAULT_RISKY_PAYER_PREFIX.to_string(),
        }
    }
}

impl RuleSet {
    pub fn check(&self, txn: &Transaction) -> Option<RuleHit> {
        if txn.amount > self.high_amount_threshold {
            return Some(RuleHit::HighAmount);
        }
        if txn.payer_id.starts_with(&self.risky_payer_prefix) {
            return Some(RuleHit::RiskyPayer);
        }
        None
    }
}
