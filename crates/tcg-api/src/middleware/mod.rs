//! API middleware.

pub mod metrics;
