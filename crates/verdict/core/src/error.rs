//! Error types for the harness.

use crate::location::Location;
use thiserror::Error;

/// Message recorded when the resource counter goes negative.
pub const RESOURCE_VIOLATION_MESSAGE: &str = "(RC < 0) Deallocating not allocated value";

/// The resource counter went below zero.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("(RC < 0) Deallocating not allocated value (counter {counter}) at {location}")]
pub struct ResourceViolation {
    pub counter: i64,
    pub location: Location,
}

/// Errors surfaced by the harness outside of recorded outcomes.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Resource counter invariant violated.
    #[error(transparent)]
    Resource(#[from] ResourceViolation),

    /// Configuration could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// A requested test case is not registered.
    #[error("unknown test case: {0}")]
    UnknownCase(String),
}

/// Result type for harness operations.
pub type HarnessResult<T> = Result<T, HarnessError>;
