use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::error::CoreError;
use crate::timestamp::{self, parse_timestamp};

/// A transaction as submitted by a client. `transaction_id` and `timestamp`
/// may be omitted and are filled in by [`TransactionPayload::normalize`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionPayload {
    #[serde(default)]
    pub transaction_id: Option<String>,
    pub amount: f64,
    pub payer_id: String,
    pub payee_id: String,
    pub payment_mode: String,
    pub transaction_channel: String,
    #[serde(default)]
    pub payment_gateway_bank: Option<String>,
    #[serde(default, deserialize_with = "timestamp::deserialize_optional")]
    pub timestamp: Option<Timestamp>,
}

/// A fully populated transaction. Produced only by normalization; never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub transaction_id: String,
    pub amount: f64,
    pub payer_id: String,
    pub payee_id: String,
    pub payment_mode: String,
    pub transaction_channel: String,
    pub payment_gateway_bank: Option<String>,
    pub timestamp: Timestamp,
}

impl TransactionPayload {
    /// Produce a complete [`Transaction`], generating an id and stamping
    /// `now` where the client left those out.
    pub fn normalize(self, now: Timestamp) -> Result<Transaction, CoreError> {
        if !self.amount.is_finite() {
            return Err(CoreError::invalid("amount", "must be a finite number"));
        }
        if self.amount < 0.0 {
            return Err(CoreError::invalid("amount", "must not be negative"));
        }

        let transaction_id = match self.transaction_id {
            Some(id) if !id.trim().is_empty() => id,
            _ => Uuid::new_v4().to_string(),
        };

        Ok(Transaction {
            transaction_id,
            amount: self.amount,
            payer_id: self.payer_id,
            payee_id: self.payee_id,
            payment_mode: self.payment_mode,
            transaction_channel: self.transaction_channel,
            payment_gateway_bank: self.payment_gateway_bank.filter(|b| !b.is_empty()),
            timestamp: self.timestamp.unwrap_or(now),
        })
    }

    /// Build a payload from a loosely typed JSON object, as accepted by the
    /// bulk upload path. Amounts may arrive as numeric strings and
    /// identifiers as numbers.
    pub fn from_loose(item: &Value) -> Result<Self, CoreError> {
        let obj = item
            .as_object()
            .ok_or_else(|| CoreError::invalid("transaction", "expected a JSON object"))?;

        let amount = match obj.get("amount") {
            None | Some(Value::Null) => return Err(CoreError::MissingField("amount")),
            Some(Value::Number(n)) => n
                .as_f64()
                .ok_or_else(|| CoreError::invalid("amount", n.to_string()))?,
            Some(Value::String(s)) => s
                .trim()
                .parse::<f64>()
                .map_err(|e| CoreError::invalid("amount", format!("{s:?}: {e}")))?,
            Some(other) => return Err(CoreError::invalid("amount", other.to_string())),
        };

        let timestamp = match obj.get("timestamp") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s.trim().is_empty() => None,
            Some(Value::String(s)) => Some(parse_timestamp(s)?),
            Some(other) => return Err(CoreError::InvalidTimestamp(other.to_string())),
        };

        Ok(Self {
            transaction_id: loose_string(obj.get("transaction_id"), "transaction_id")?,
            amount,
            payer_id: required_string(obj.get("payer_id"), "payer_id")?,
            payee_id: required_string(obj.get("payee_id"), "payee_id")?,
            payment_mode: required_string(obj.get("payment_mode"), "payment_mode")?,
            transaction_channel: required_string(
                obj.get("transaction_channel"),
                "transaction_channel",
            )?,
            payment_gateway_bank: loose_string(
                obj.get("payment_gateway_bank"),
                "payment_gateway_bank",
            )?,
            timestamp,
        })
    }
}

fn loose_string(value: Option<&Value>, field: &'static str) -> Result<Option<String>, CoreError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(CoreError::invalid(field, format!("unexpected value {other}"))),
    }
}

fn required_string(value: Option<&Value>, field: &'static str) -> Result<String, CoreError> {
    loose_string(value, field)?.ok_or(CoreError::MissingField(field))
}
