//! fraudscreen-audit
//!
//! Structured audit events for operations that change stored decisions.

pub mod events;
