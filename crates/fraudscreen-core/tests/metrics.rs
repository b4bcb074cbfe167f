use fraudscreen_core::models::decision::DecisionRecord;
use fraudscreen_core::models::metrics::{EvaluationMetrics, TimeRange};
use fraudscreen_core::models::transaction::TransactionPayload;
use fraudscreen_core::verdict::Verdict;
use jiff::{SignedDuration, Timestamp};

fn record(days_ago: i64, predicted: bool, reported: bool, now: Timestamp) -> DecisionRecord {
    let ts = now - SignedDuration::from_hours(days_ago * 24);
    let txn = TransactionPayload {
        transaction_id: None,
        amount: 10.0,
        payer_id: "p1".into(),
        payee_id: "p2".into(),
        payment_mode: "upi".into(),
        transaction_channel: "web".into(),
        payment_gateway_bank: None,
        timestamp: Some(ts),
    }
    .normalize(now)
    .unwrap();
    let score = if predicted { 0.9 } else { 0.1 };
    let mut r = DecisionRecord::new(txn, Verdict::combine(None, score, 0.7), score);
    r.is_fraud_reported = reported;
    r
}

#[test]
fn confusion_matrix_over_all_time() {
    let now = Timestamp::now();
    let records = vec![
        record(1, true, true, now),
        record(2, true, false, now),
        record(3, false, false, now),
        record(4, false, false, now),
        record(200, false, true, now),
    ];
    let m = EvaluationMetrics::compute(&records, TimeRange::All, now);
    assert_eq!(m.total, 5);
    assert_eq!(
        (m.true_positives, m.false_positives, m.true_negatives, m.false_negatives),
        (1, 1, 2, 1)
    );
    assert_eq!(m.precision, 0.5);
    assert_eq!(m.recall, 0.5);
    assert_eq!(m.f1_score, 0.5);
    assert_eq!(m.accuracy, 0.6);
}

#[test]
fn window_excludes_old_and_future_records() {
    let now = Timestamp::now();
    let records = vec![
        record(1, true, true, now),
        record(10, true, true, now),
        record(-1, true, true, now),
    ];
    let m = EvaluationMetrics::compute(&records, TimeRange::Week, now);
    assert_eq!(m.total, 1);
    assert_eq!(m.range, TimeRange::Week);
}

#[test]
fn empty_input_yields_zero_ratios() {
    let m = EvaluationMetrics::compute(&[], TimeRange::default(), Timestamp::now());
    assert_eq!(m.range, TimeRange::Month);
    assert_eq!(m.total, 0);
    assert_eq!(m.precision, 0.0);
    assert_eq!(m.f1_score, 0.0);
    assert_eq!(m.accuracy, 0.0);
}
