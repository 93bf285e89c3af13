//! Profile domain model for the leader roster.
//!
//! # Responsibility
//! - Define canonical profile records as decoded from the bundled dataset.
//! - Own the derived period classification used by list filtering.
//!
//! # Invariants
//! - Every profile is identified by a roster-unique `ProfileId`.
//! - Period buckets are derived on demand and never stored on a record.

pub mod period;
pub mod profile;
