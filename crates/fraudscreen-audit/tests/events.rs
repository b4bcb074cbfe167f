use fraudscreen_audit::events::{AuditAction, AuditEvent};

#[test]
fn fraud_reported_carries_details() {
    let event = AuditEvent::fraud_reported("t-1", "chargeback");
    assert_eq!(event.action, AuditAction::FraudReported);
    assert_eq!(event.resource_type, "transaction");
    assert_eq!(event.resource_id, "t-1");

    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["action"], "fraud_reported");
    assert_eq!(json["details"]["fraud_details"], "chargeback");
    event.emit();
}

#[test]
fn store_reset_counts_removed_rows() {
    let event = AuditEvent::store_reset(42);
    assert_eq!(event.action.as_str(), "store_reset");
    assert_eq!(event.details.as_ref().unwrap()["removed"], 42);
}
