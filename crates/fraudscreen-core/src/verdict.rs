use crate::models::decision::FraudSource;
use crate::rules::RuleHit;

pub const MODEL_REASON: &str = "AI model detected fraud";
pub const SAFE_REASON: &str = "Transaction is safe";

/// Boolean fraud determination plus its source and reason.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub is_fraud: bool,
    pub source: FraudSource,
    pub reason: String,
}

impl Verdict {
    /// A rule hit always wins. Otherwise the score decides, flagging only
    /// when it is strictly above `model_threshold`.
    pub fn combine(rule: Option<RuleHit>, score: f64, model_threshold: f64) -> Self {
        match rule {
            Some(hit) => Self {
                is_fraud: true,
                source: FraudSource::Rule,
                reason: hit.reason().to_string(),
            },
            None if score > model_threshold => Self {
                is_fraud: true,
                source: FraudSource::Model,
                reason: MODEL_REASON.to_string(),
            },
            None => Self {
                is_fraud: false,
                source: FraudSource::None,
                reason: SAFE_REASON.to_string(),
            },
        }
    }
}
