use serde::Serialize;
use tracing::{Level, event};

/// An application-level audit event, emitted through `tracing` under the
/// `audit` target so it can be routed separately from request logs.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    pub action: AuditAction,
    pub resource_type: &'static str,
    pub resource_id: String,
    pub details: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    FraudReported,
    StoreReset,
}

impl AuditAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FraudReported => "fraud_reported",
            Self::StoreReset => "store_reset",
        }
    }
}

impl AuditEvent {
    pub fn new(
        action: AuditAction,
        resource_type: &'static str,
        resource_id: impl Into<String>,
    ) -> Self {
        Self {
            action,
            resource_type,
            resource_id: resource_id.into(),
            details: None,
        }
    }

    /// A correction applied to a single transaction.
    pub fn fraud_reported(transaction_id: impl Into<String>, details: &str) -> Self {
        Self::new(AuditAction::FraudReported, "transaction", transaction_id)
            .with_details(serde_json::json!({ "fraud_details": details }))
    }

    /// The whole decision table was cleared.
    pub fn store_reset(removed: u64) -> Self {
        Self::new(AuditAction::StoreReset, "decision_store", "fraud_detection")
            .with_details(serde_json::json!({ "removed": removed }))
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn emit(&self) {
        let details = self
            .details
            .as_ref()
            .map(|d| d.to_string())
            .unwrap_or_default();
        event!(
            target: "audit",
            Level::INFO,
            audit.action = self.action.as_str(),
            audit.resource_type = self.resource_type,
            audit.resource_id = %self.resource_id,
            audit.details = %details,
            "audit event"
        );
    }
}
