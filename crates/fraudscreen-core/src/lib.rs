//! fraudscreen-core
//!
//! Pure domain types for transaction fraud screening: payload normalization,
//! the ordered rule set, the pluggable score function, verdict combination
//! and evaluation metrics. No database or HTTP dependency.

pub mod error;
pub mod models;
pub mod rules;
pub mod scoring;
pub mod test_data;
pub mod timestamp;
pub mod verdict;
