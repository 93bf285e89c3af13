//! Client-side roster search entry points.
//!
//! # Responsibility
//! - Match profiles against free-text, period and domain criteria.
//! - Slice matched results into fixed-size pages.
//!
//! # Invariants
//! - Every function here is pure; no call depends on call history.
//! - Filtering preserves roster order.

pub mod filter;
pub mod page;
