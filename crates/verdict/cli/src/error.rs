//! CLI error types.

use thiserror::Error;

/// Errors raised by the command-line runner.
#[derive(Debug, Error)]
pub enum CliError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Harness error, such as an unknown case name or a malformed
    /// configuration file.
    #[error(transparent)]
    Harness(#[from] verdict::HarnessError),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
