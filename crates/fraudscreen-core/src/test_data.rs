//! Synthetic transactions for development and demos.

use jiff::{SignedDuration, Timestamp};
use rand::Rng;
use rand::seq::IndexedRandom;
use uuid::Uuid;

use crate::models::transaction::TransactionPayload;

pub const DEFAULT_COUNT: usize = 100;
/// Share of generated transactions later marked as reported fraud.
pub const REPORTED_SHARE: f64 = 0.2;
pub const REPORTED_DETAILS: &str = "Reported during test data generation";

const MIN_AMOUNT: f64 = 100.0;
const MAX_AMOUNT: f64 = 20_000.0;
const LOOKBACK_SECS: i64 = 90 * 24 * 60 * 60;

const PAYERS: &[&str] = &[
    "payer_001", "payer_002", "payer_003", "payer_004", "payer_005", "payer_006", "RISK_001",
    "RISK_002",
];
const PAYEES: &[&str] = &[
    "merchant_001",
    "merchant_002",
    "merchant_003",
    "merchant_004",
    "payee_001",
    "payee_002",
];
const PAYMENT_MODES: &[&str] = &["credit_card", "debit_card", "upi", "net_banking", "wallet"];
const CHANNELS: &[&str] = &["web", "mobile", "pos", "atm"];
const BANKS: &[&str] = &["HDFC", "ICICI", "SBI", "Axis", "Kotak"];

/// Generate `count` payloads with ids, timestamps within the last 90 days
/// of `now`, and amounts in `[100, 20000]`.
pub fn synthesize<R: Rng + ?Sized>(rng: &mut R, count: usize, now: Timestamp) -> Vec<TransactionPayload> {
    (0..count)
        .map(|_| {
            let amount = (rng.random_range(MIN_AMOUNT..=MAX_AMOUNT) * 100.0).round() / 100.0;
            let age = SignedDuration::from_secs(rng.random_range(0..=LOOKBACK_SECS));
            let timestamp = now.checked_sub(age).unwrap_or(now);
            let bank = if rng.random_bool(0.8) {
                pick(rng, BANKS).map(str::to_string)
            } else {
                None
            };

            TransactionPayload {
                transaction_id: Some(Uuid::new_v4().to_string()),
                amount,
                payer_id: pick(rng, PAYERS).unwrap_or("payer_001").to_string(),
                payee_id: pick(rng, PAYEES).unwrap_or("payee_001").to_string(),
                payment_mode: pick(rng, PAYMENT_MODES).unwrap_or("upi").to_string(),
                transaction_channel: pick(rng, CHANNELS).unwrap_or("web").to_string(),
                payment_gateway_bank: bank,
                timestamp: Some(timestamp),
            }
        })
        .collect()
}

/// Pick which of `count` generated transactions get reported.
pub fn reported_indices<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<usize> {
    let amount = (count as f64 * REPORTED_SHARE).round() as usize;
    let mut picked = rand::seq::index::sample(rng, count, amount.min(count)).into_vec();
    picked.sort_unstable();
    picked
}

fn pick<R: Rng + ?Sized>(rng: &mut R, pool: &'static [&'static str]) -> Option<&'static str> {
    pool.choose(rng).copied()
}
