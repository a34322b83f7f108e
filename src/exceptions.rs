//! ## Custom Errors for the CLI Adapter
//!
//! This module defines the error types of the crate using `thiserror`.
//! Deriving a logger from flags never fails; errors only come from the two
//! places where the crate talks to its collaborators: reading parsed values back
//! from `clap`, and installing a logger as the process-wide default.
//!
//! ### Example
//!
//! ```rust
//! use tracing_cli_adapter::exceptions::{LoggerError, LoggerResult};
//!
//! fn install() -> LoggerResult<()> {
//!     Err(LoggerError::Flags(clap::Error::new(clap::error::ErrorKind::ArgumentConflict)))
//! }
//! assert!(install().is_err());
//! ```

use thiserror::Error;

/// Errors raised by the CLI adapter.
#[derive(Debug, Error)]
pub enum LoggerError {
    /// The parsed matches could not be read back into the logging flags.
    #[error("Flag error: {0}")]
    Flags(#[from] clap::Error),

    /// A global default logger has already been installed for this process.
    #[error("Logger installation error: {0}")]
    GlobalDefault(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// A convenient result type for CLI adapter operations.
pub type LoggerResult<T> = std::result::Result<T, LoggerError>;
