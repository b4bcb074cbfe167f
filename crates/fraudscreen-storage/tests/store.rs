//! Decision store behaviour against SQLite.

use fraudscreen_core::models::decision::{DecisionRecord, FraudSource};
use fraudscreen_core::models::transaction::TransactionPayload;
use fraudscreen_core::verdict::Verdict;
use fraudscreen_storage::error::StorageError;
use fraudscreen_storage::store::DecisionStore;
use jiff::Timestamp;

fn record(id: &str, score: f64) -> DecisionRecord {
    let txn = TransactionPayload {
        transaction_id: Some(id.to_string()),
        amount: 250.75,
        payer_id: "payer_001".into(),
        payee_id: "merchant_001".into(),
        payment_mode: "upi".into(),
        transaction_channel: "mobile".into(),
        payment_gateway_bank: Some("HDFC".into()),
        timestamp: Some("2025-05-04T03:02:01.5Z".parse().unwrap()),
    }
    .normalize(Timestamp::now())
    .unwrap();
    DecisionRecord::new(txn, Verdict::combine(None, score, 0.7), score)
}

#[tokio::test]
async fn insert_then_get_returns_same_record() {
    let store = DecisionStore::in_memory().await.unwrap();
    let rec = record("t-1", 0.91);
    store.insert(&rec).await.unwrap();

    let fetched = store.get("t-1").await.unwrap();
    assert_eq!(fetched, rec);
    assert_eq!(fetched.fraud_source, FraudSource::Model);
}

#[tokio::test]
async fn duplicate_insert_is_rejected_without_overwrite() {
    let store = DecisionStore::in_memory().await.unwrap();
    store.insert(&record("dup", 0.1)).await.unwrap();

    let err = store.insert(&record("dup", 0.95)).await.unwrap_err();
    assert!(matches!(err, StorageError::DuplicateKey { ref transaction_id } if transaction_id == "dup"));

    let kept = store.get("dup").await.unwrap();
    assert_eq!(kept.fraud_score, 0.1);
    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn get_unknown_is_not_found() {
    let store = DecisionStore::in_memory().await.unwrap();
    assert!(matches!(
        store.get("missing").await,
        Err(StorageError::NotFound { .. })
    ));
}

#[tokio::test]
async fn list_preserves_insertion_order() {
    let store = DecisionStore::in_memory().await.unwrap();
    for id in ["c", "a", "b"] {
        store.insert(&record(id, 0.2)).await.unwrap();
    }
    let first = store.list().await.unwrap();
    let ids: Vec<_> = first.iter().map(|r| r.transaction_id.as_str()).collect();
    assert_eq!(ids, ["c", "a", "b"]);
    assert_eq!(store.list().await.unwrap(), first);
}

#[tokio::test]
async fn report_fraud_only_touches_correction_fields() {
    let store = DecisionStore::in_memory().await.unwrap();
    let original = record("t-9", 0.3);
    store.insert(&original).await.unwrap();

    let updated = store.report_fraud("t-9", "Customer disputed charge").await.unwrap();
    assert!(updated.is_fraud_reported);
    assert_eq!(updated.fraud_reason, "Customer disputed charge");
    assert_eq!(updated.is_fraud_predicted, original.is_fraud_predicted);
    assert_eq!(updated.fraud_source, original.fraud_source);
    assert_eq!(updated.fraud_score, original.fraud_score);
    assert_eq!(store.get("t-9").await.unwrap(), updated);
}

#[tokio::test]
async fn report_unknown_leaves_store_untouched() {
    let store = DecisionStore::in_memory().await.unwrap();
    store.insert(&record("t-1", 0.3)).await.unwrap();
    let before = store.list().await.unwrap();

    let err = store.report_fraud("nope", "x").await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound { .. }));
    assert_eq!(store.list().await.unwrap(), before);
}

#[tokio::test]
async fn clear_removes_everything() {
    let store = DecisionStore::in_memory().await.unwrap();
    store.insert(&record("a", 0.3)).await.unwrap();
    store.insert(&record("b", 0.3)).await.unwrap();
    assert_eq!(store.clear().await.unwrap(), 2);
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn file_store_survives_reconnect() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("decisions.db").display());

    let store = DecisionStore::connect(&url, 2).await.unwrap();
    store.init().await.unwrap();
    store.insert(&record("persisted", 0.5)).await.unwrap();
    store.close().await;

    let reopened = DecisionStore::connect(&url, 2).await.unwrap();
    reopened.init().await.unwrap();
    assert_eq!(reopened.get("persisted").await.unwrap().fraud_score, 0.5);
}

#[tokio::test]
async fn records_serialize_with_lowercase_source() {
    let store = DecisionStore::in_memory().await.unwrap();
    store.insert(&record("s", 0.05)).await.unwrap();
    let json = serde_json::to_value(store.get("s").await.unwrap()).unwrap();
    assert_eq!(json["fraud_source"], "none");
    assert_eq!(json["fraud_reason"], "Transaction is safe");
}
