//! # tracing-cli-adapter
//!
//! Configure a [`tracing`] logger's verbosity from command-line flags.
//!
//! The crate registers `-v`/`--verbose`, `--debug`, `--trace`, `--quiet` and `--silent`
//! on a [`clap`] command and, once the command line is parsed, derives a logger from a
//! base logger with a fixed precedence:
//!
//! - `--trace`: `TRACE` and above, with call site;
//! - `--debug`: `DEBUG` and above, with call site;
//! - `--verbose` (`-v`): `DEBUG` and above;
//! - `--quiet`: `WARN` and above;
//! - `--silent`: nothing at all, whatever else is set.
//!
//! Later entries override earlier ones on the level; the call site, once enabled, stays.
//! With no flag the base logger is returned unchanged (`INFO`, no call site).
//!
//! ```rust,no_run
//! use clap::Command;
//! use tracing_cli_adapter::{Logger, LoggerGenerator};
//!
//! let mut generator = LoggerGenerator::new(Logger::new());
//! let matches = generator.update_command(Command::new("app")).get_matches();
//! generator.update_from_matches(&matches)?;
//! generator.logger().init()?;
//!
//! tracing::info!("ready");
//! # Ok::<(), tracing_cli_adapter::exceptions::LoggerError>(())
//! ```

pub mod exceptions;
pub mod flags;
pub mod generator;
pub mod logger;
pub mod logging;
pub mod pipeline;

pub use flags::LogFlags;
pub use generator::LoggerGenerator;
pub use logger::Logger;
