//! Fraud-likelihood scoring.
//!
//! The service only sees the [`FraudScorer`] trait. [`RandomScorer`] is a
//! placeholder until a trained model is available.

use rand::Rng;

use crate::models::transaction::Transaction;

/// Default score above which a transaction is judged fraudulent.
pub const DEFAULT_MODEL_THRESHOLD: f64 = 0.7;

pub trait FraudScorer: Send + Sync {
    /// Returns a score in `[0, 1]`.
    fn score(&self, txn: &Transaction) -> f64;
}

/// Uniform random draw rounded to two decimal places.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomScorer;

impl FraudScorer for RandomScorer {
    fn score(&self, _txn: &Transaction) -> f64 {
        let raw: f64 = rand::rng().random_range(0.0..=1.0);
        (raw * 100.0).round() / 100.0
    }
}

/// Always returns the same score. Useful for tests and dry runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedScorer(pub f64);

impl FraudScorer for FixedScorer {
    fn score(&self, _txn: &Transaction) -> f64 {
        self.0
    }
}
