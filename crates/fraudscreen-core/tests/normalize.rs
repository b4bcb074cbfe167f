//! Payload normalization and lenient parsing.

use std::collections::HashSet;

use fraudscreen_core::error::CoreError;
use fraudscreen_core::models::transaction::TransactionPayload;
use fraudscreen_core::timestamp::parse_timestamp;
use jiff::Timestamp;
use serde_json::json;

fn payload() -> TransactionPayload {
    serde_json::from_value(json!({
        "amount": 500,
        "payer_id": "p1",
        "payee_id": "p2",
        "payment_mode": "upi",
        "transaction_channel": "web"
    }))
    .expect("payload parses")
}

#[test]
fn fills_missing_id_and_timestamp() {
    let now: Timestamp = "2025-06-01T12:00:00Z".parse().unwrap();
    let txn = payload().normalize(now).unwrap();
    assert!(!txn.transaction_id.is_empty());
    assert_eq!(txn.timestamp, now);
    assert_eq!(txn.payment_gateway_bank, None);
}

#[test]
fn generated_ids_are_unique() {
    let ids: HashSet<String> = (0..200)
        .map(|_| payload().normalize(Timestamp::now()).unwrap().transaction_id)
        .collect();
    assert_eq!(ids.len(), 200);
}

#[test]
fn keeps_supplied_id_and_timestamp() {
    let mut p = payload();
    p.transaction_id = Some("abc".into());
    p.timestamp = Some("2024-01-02T03:04:05Z".parse().unwrap());
    let txn = p.clone().normalize(Timestamp::now()).unwrap();
    assert_eq!(txn.transaction_id, "abc");
    assert_eq!(txn.timestamp, p.timestamp.unwrap());
}

#[test]
fn blank_id_is_replaced() {
    let mut p = payload();
    p.transaction_id = Some("  ".into());
    let txn = p.normalize(Timestamp::now()).unwrap();
    assert_ne!(txn.transaction_id.trim(), "");
}

#[test]
fn rejects_negative_amount() {
    let mut p = payload();
    p.amount = -1.0;
    assert!(matches!(
        p.normalize(Timestamp::now()),
        Err(CoreError::InvalidField { field: "amount", .. })
    ));
}

#[test]
fn strict_payload_requires_fields() {
    let err = serde_json::from_value::<TransactionPayload>(json!({
        "amount": 10,
        "payer_id": "p1"
    }));
    assert!(err.is_err());
}

#[test]
fn naive_timestamps_are_utc() {
    let naive = parse_timestamp("2025-03-01T10:00:00").unwrap();
    let explicit: Timestamp = "2025-03-01T10:00:00Z".parse().unwrap();
    assert_eq!(naive, explicit);

    let offset = parse_timestamp("2025-03-01T12:00:00+02:00").unwrap();
    assert_eq!(offset, explicit);

    assert!(parse_timestamp("yesterday").is_err());
}

#[test]
fn strict_payload_accepts_naive_timestamp() {
    let p: TransactionPayload = serde_json::from_value(json!({
        "amount": 10,
        "payer_id": "p1",
        "payee_id": "p2",
        "payment_mode": "upi",
        "transaction_channel": "web",
        "timestamp": "2025-03-01T10:00:00.250"
    }))
    .unwrap();
    assert!(p.timestamp.is_some());
}

#[test]
fn loose_item_coerces_types() {
    let p = TransactionPayload::from_loose(&json!({
        "transaction_id": 42,
        "amount": "1250.50",
        "payer_id": 7,
        "payee_id": "m1",
        "payment_mode": "card",
        "transaction_channel": "pos",
        "payment_gateway_bank": null,
        "timestamp": "2025-03-01T10:00:00"
    }))
    .unwrap();
    assert_eq!(p.transaction_id.as_deref(), Some("42"));
    assert_eq!(p.amount, 1250.5);
    assert_eq!(p.payer_id, "7");
    assert_eq!(p.payment_gateway_bank, None);
    assert!(p.timestamp.is_some());
}

#[test]
fn loose_item_reports_missing_field() {
    let err = TransactionPayload::from_loose(&json!({
        "amount": 5,
        "payer_id": "p1",
        "payee_id": "p2",
        "payment_mode": "upi"
    }))
    .unwrap_err();
    assert!(matches!(err, CoreError::MissingField("transaction_channel")));

    let err = TransactionPayload::from_loose(&json!("not an object")).unwrap_err();
    assert!(matches!(err, CoreError::InvalidField { field: "transaction", .. }));

    let err = TransactionPayload::from_loose(&json!({"amount": "lots"})).unwrap_err();
    assert!(matches!(err, CoreError::InvalidField { field: "amount", .. }));
}
