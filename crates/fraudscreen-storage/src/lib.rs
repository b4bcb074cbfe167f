//! fraudscreen-storage
//!
//! The decision store: one SQLite table keyed by transaction id, reached
//! through a pooled `sqlx` connection per operation.

pub mod error;
pub mod store;

mod row;
