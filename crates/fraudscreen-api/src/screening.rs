//! Intake and correction workflow.
//!
//! Every submission follows the same path: normalize, rule check, score,
//! combine, persist. Batch and bulk endpoints loop over it.

use std::collections::BTreeMap;
use std::sync::Arc;

use fraudscreen_audit::events::AuditEvent;
use fraudscreen_core::models::decision::{Decision, DecisionRecord};
use fraudscreen_core::models::transaction::{Transaction, TransactionPayload};
use fraudscreen_core::rules::RuleSet;
use fraudscreen_core::scoring::FraudScorer;
use fraudscreen_core::test_data;
use fraudscreen_core::verdict::Verdict;
use fraudscreen_storage::store::DecisionStore;
use jiff::Timestamp;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::ApiError;

/// How many successful results a bulk upload echoes back.
pub const UPLOAD_PREVIEW_LEN: usize = 10;

#[derive(Debug, Clone, Serialize)]
pub struct UploadSummary {
    pub status: &'static str,
    pub processed_count: usize,
    pub results: Vec<Decision>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TestDataSummary {
    pub message: String,
    pub count: i64,
    pub reported_count: usize,
}

pub struct Screener {
    store: DecisionStore,
    scorer: Arc<dyn FraudScorer>,
    rules: RuleSet,
    model_threshold: f64,
}

impl Screener {
    pub fn new(
        store: DecisionStore,
        scorer: Arc<dyn FraudScorer>,
        rules: RuleSet,
        model_threshold: f64,
    ) -> Self {
        Self {
            store,
            scorer,
            rules,
            model_threshold,
        }
    }

    pub fn store(&self) -> &DecisionStore {
        &self.store
    }

    /// Rule check, score and verdict for an already normalized transaction.
    /// Pure apart from the scorer.
    pub fn decide(&self, txn: Transaction) -> DecisionRecord {
        let rule = self.rules.check(&txn);
        let score = self.scorer.score(&txn).clamp(0.0, 1.0);
        let verdict = Verdict::combine(rule, score, self.model_threshold);
        DecisionRecord::new(txn, verdict, score)
    }

    /// Screen and persist a single transaction.
    pub async fn detect(&self, payload: TransactionPayload) -> Result<Decision, ApiError> {
        let txn = payload.normalize(Timestamp::now())?;
        let record = self.decide(txn);
        self.store.insert(&record).await?;

        debug!(
            transaction_id = %record.transaction_id,
            source = %record.fraud_source,
            score = record.fraud_score,
            is_fraud = record.is_fraud_predicted,
            "transaction screened"
        );
        Ok(Decision::from(record))
    }

    /// Screen each payload in order. The first failure aborts the batch;
    /// items already stored stay stored.
    pub async fn detect_batch(
        &self,
        payloads: Vec<TransactionPayload>,
    ) -> Result<BTreeMap<String, Decision>, ApiError> {
        let mut results = BTreeMap::new();
        for payload in payloads {
            let decision = self.detect(payload).await?;
            results.insert(decision.record.transaction_id.clone(), decision);
        }
        Ok(results)
    }

    /// Screen loosely typed items, skipping any that fail to parse or
    /// persist.
    pub async fn upload(&self, items: Vec<Value>) -> UploadSummary {
        let total = items.len();
        let mut processed_count = 0;
        let mut results = Vec::new();

        for (index, item) in items.iter().enumerate() {
            let outcome = match TransactionPayload::from_loose(item) {
                Ok(payload) => self.detect(payload).await,
                Err(e) => Err(e.into()),
            };
            match outcome {
                Ok(decision) => {
                    processed_count += 1;
                    if results.len() < UPLOAD_PREVIEW_LEN {
                        results.push(decision);
                    }
                }
                Err(e) => warn!(index, error = %e, "skipping upload item"),
            }
        }

        info!(total, processed_count, "bulk upload finished");
        UploadSummary {
            status: "success",
            processed_count,
            results,
        }
    }

    /// Record a post-hoc fraud report. The prediction itself is not revisited.
    pub async fn report(
        &self,
        transaction_id: &str,
        fraud_details: &str,
    ) -> Result<DecisionRecord, ApiError> {
        let record = self.store.report_fraud(transaction_id, fraud_details).await?;
        AuditEvent::fraud_reported(transaction_id, fraud_details).emit();
        Ok(record)
    }

    /// Replace the table contents with `count` synthetic transactions, a
    /// fifth of which are then reported as fraud.
    pub async fn generate_test_data(&self, count: usize) -> Result<TestDataSummary, ApiError> {
        let removed = self.store.clear().await?;
        AuditEvent::store_reset(removed).emit();

        // ThreadRng is not Send; draw everything before the first await.
        let (payloads, reported) = {
            let mut rng = rand::rng();
            let payloads = test_data::synthesize(&mut rng, count, Timestamp::now());
            let reported = test_data::reported_indices(&mut rng, count);
            (payloads, reported)
        };

        let mut ids = Vec::with_capacity(payloads.len());
        for payload in payloads {
            ids.push(self.detect(payload).await?.record.transaction_id);
        }
        for &index in &reported {
            self.report(&ids[index], test_data::REPORTED_DETAILS).await?;
        }

        let count = self.store.count().await?;
        info!(count, reported = reported.len(), "test data generated");
        Ok(TestDataSummary {
            message: format!("Generated {count} test transactions"),
            count,
            reported_count: reported.len(),
        })
    }
}
