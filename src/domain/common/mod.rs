//! Shared domain services (error classification)

pub mod error_classifier;
