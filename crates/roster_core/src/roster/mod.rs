//! Immutable in-memory roster.
//!
//! # Responsibility
//! - Decode the bundled profile dataset once at startup.
//! - Provide id lookups and soft cross-reference resolution.
//!
//! # Invariants
//! - Profile ids are unique; duplicates are rejected at construction.
//! - A roster is never mutated after construction.

pub mod store;
