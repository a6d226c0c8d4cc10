//! Monitor module error types

use thiserror::Error;

/// Result type for strict monitor queries
pub type Result<T> = std::result::Result<T, EnumerationError>;

/// Errors surfaced by the strict enumeration variant
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnumerationError {
    #[error("display enumeration failed after collecting {collected} monitor(s)")]
    EnumerationFailed { collected: usize },
}
