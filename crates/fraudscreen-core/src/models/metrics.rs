use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::decision::DecisionRecord;

/// Look-back window for evaluation metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum TimeRange {
    Week,
    #[default]
    Month,
    Quarter,
    Year,
    All,
}

impl TimeRange {
    fn days(self) -> Option<i64> {
        match self {
            Self::Week => Some(7),
            Self::Month => Some(30),
            Self::Quarter => Some(90),
            Self::Year => Some(365),
            Self::All => None,
        }
    }

    /// Earliest timestamp included in the window ending at `now`.
    pub fn start(self, now: Timestamp) -> Option<Timestamp> {
        let days = self.days()?;
        now.checked_sub(SignedDuration::from_hours(days * 24)).ok()
    }
}

/// Confusion matrix of predicted against reported fraud.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvaluationMetrics {
    pub range: TimeRange,
    pub total: u64,
    pub true_positives: u64,
    pub false_positives: u64,
    pub true_negatives: u64,
    pub false_negatives: u64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub accuracy: f64,
}

impl EvaluationMetrics {
    pub fn compute(records: &[DecisionRecord], range: TimeRange, now: Timestamp) -> Self {
        let start = range.start(now);
        let mut m = Self {
            range,
            ..Self::default()
        };

        for record in records {
            if record.timestamp > now || start.is_some_and(|s| record.timestamp < s) {
                continue;
            }
            m.total += 1;
            match (record.is_fraud_predicted, record.is_fraud_reported) {
                (true, true) => m.true_positives += 1,
                (true, false) => m.false_positives += 1,
                (false, false) => m.true_negatives += 1,
                (false, true) => m.false_negatives += 1,
            }
        }

        m.precision = ratio(m.true_positives, m.true_positives + m.false_positives);
        m.recall = ratio(m.true_positives, m.true_positives + m.false_negatives);
        m.f1_score = if m.precision + m.recall > 0.0 {
            2.0 * m.precision * m.recall / (m.precision + m.recall)
        } else {
            0.0
        };
        m.accuracy = ratio(m.true_positives + m.true_negatives, m.total);
        m
    }
}

fn ratio(num: u64, den: u64) -> f64 {
    if den == 0 { 0.0 } else { num as f64 / den as f64 }
}
