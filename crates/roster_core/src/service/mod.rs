//! Core use-case services.
//!
//! # Responsibility
//! - Combine roster lookups, filtering and pagination into view-level APIs.
//! - Keep UI/FFI layers free of filter and paging arithmetic.

pub mod browse_service;
pub mod session;
