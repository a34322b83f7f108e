//! ## Logger Generator
//!
//! [`LoggerGenerator`] ties a base [`Logger`] to a set of [`LogFlags`]. Use it in three
//! steps:
//!
//! 1. register the flags on a `clap` command with [`LoggerGenerator::update_command`];
//! 2. after parsing, copy the values back with [`LoggerGenerator::update_from_matches`];
//! 3. get the configured logger with [`LoggerGenerator::logger`].
//!
//! ```rust
//! use clap::Command;
//! use tracing::Level;
//! use tracing_cli_adapter::{Logger, LoggerGenerator};
//!
//! let mut generator = LoggerGenerator::new(Logger::new());
//! let command = generator.update_command(Command::new("app"));
//! let matches = command.get_matches_from(["app", "--debug"]);
//! generator.update_from_matches(&matches).unwrap();
//!
//! let logger = generator.logger();
//! assert!(logger.enabled(&Level::DEBUG));
//! assert!(logger.has_call_site());
//! ```
//!
//! Calling [`LoggerGenerator::logger`] before the flags are read is allowed and returns
//! the base logger unchanged.

use crate::exceptions::LoggerResult;
use crate::flags::LogFlags;
use crate::logger::{Logger, StderrWriter};
use crate::pipeline::Pipeline;
use clap::{ArgMatches, Command};

/// Derives a configured logger from a base logger and the logging flags.
#[derive(Clone, Debug)]
pub struct LoggerGenerator<W = StderrWriter> {
    base: Logger<W>,
    flags: LogFlags,
}

impl<W> LoggerGenerator<W> {
    /// Create a generator with the given base logger and all flags unset.
    pub fn new(base: Logger<W>) -> Self {
        Self::from_flags(base, LogFlags::default())
    }

    /// Create a generator with flags that were parsed elsewhere, e.g. through a
    /// flattened derive parser.
    pub fn from_flags(base: Logger<W>, flags: LogFlags) -> Self {
        Self { base, flags }
    }

    /// Register the logging flags on `command`.
    pub fn update_command(&self, command: Command) -> Command {
        LogFlags::update_command(command)
    }

    /// Read the parsed flag values from `matches`.
    pub fn update_from_matches(&mut self, matches: &ArgMatches) -> LoggerResult<()> {
        self.flags.update_from_matches(matches)
    }

    /// The current flag values.
    pub fn flags(&self) -> &LogFlags {
        &self.flags
    }

    /// Mutable access to the flag values, for callers that set them by hand.
    pub fn flags_mut(&mut self) -> &mut LogFlags {
        &mut self.flags
    }

    /// The base logger every derivation starts from.
    pub fn base(&self) -> &Logger<W> {
        &self.base
    }
}

impl<W: Clone + 'static> LoggerGenerator<W> {
    /// The configured logger.
    ///
    /// This is a pure function of the base logger and the current flags; calling it
    /// twice without touching the flags gives equivalent loggers.
    pub fn logger(&self) -> Logger<W> {
        Pipeline::standard().run(&self.flags, self.base.clone())
    }
}
