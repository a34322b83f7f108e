//! ## Logging Flags
//!
//! [`LogFlags`] stores the five logging switches and knows how to register them on a
//! `clap` command:
//!
//! ```text
//! -v, --verbose   Verbose logging (debug level logging)
//!     --debug     Enable call site logging with debug logging by default
//!     --trace     Enable call site logging with trace logging by default
//!     --quiet     Log warnings and errors only
//!     --silent    No logs at all (overrides all other logging flags)
//! ```
//!
//! `-v` is the short form of `--verbose`, so the two share one storage slot.
//!
//! Every flag may be repeated and takes an optional explicit value (`--quiet=false`).
//! The last occurrence on the command line wins, so `-v --verbose=false` leaves
//! verbose logging off.
//!
//! Flags are stored independently. Any combination may be set at once; conflicts are
//! resolved later, when a logger is derived (see [`crate::pipeline`]).
//!
//! Builder-style callers use [`LogFlags::update_command`] and
//! [`LogFlags::update_from_matches`]. Derive-style callers flatten the struct:
//!
//! ```rust
//! use clap::Parser;
//! use tracing_cli_adapter::flags::LogFlags;
//!
//! #[derive(Parser)]
//! struct Cli {
//!     #[command(flatten)]
//!     logging: LogFlags,
//! }
//!
//! let cli = Cli::parse_from(["app", "-v", "--quiet"]);
//! assert!(cli.logging.verbose && cli.logging.quiet);
//! ```

use crate::exceptions::LoggerResult;
use clap::{ArgAction, ArgMatches, Args, Command, FromArgMatches};
use tracing::debug;

/// The logging switches read from the command line. All default to `false`.
#[derive(Args, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LogFlags {
    /// Verbose logging (debug level logging)
    #[arg(
        short,
        long,
        global = true,
        help_heading = "Logging",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        hide_default_value = true,
        overrides_with = "verbose"
    )]
    pub verbose: bool,

    /// Enable call site logging with debug logging by default
    #[arg(
        long,
        global = true,
        help_heading = "Logging",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        hide_default_value = true,
        overrides_with = "debug"
    )]
    pub debug: bool,

    /// Enable call site logging with trace logging by default
    #[arg(
        long,
        global = true,
        help_heading = "Logging",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        hide_default_value = true,
        overrides_with = "trace"
    )]
    pub trace: bool,

    /// Log warnings and errors only
    #[arg(
        long,
        global = true,
        help_heading = "Logging",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        hide_default_value = true,
        overrides_with = "quiet"
    )]
    pub quiet: bool,

    /// No logs at all (overrides all other logging flags)
    #[arg(
        long,
        global = true,
        help_heading = "Logging",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        hide_default_value = true,
        overrides_with = "silent"
    )]
    pub silent: bool,
}

impl LogFlags {
    /// Register the logging flags on `command`.
    ///
    /// This only adds argument definitions; it does not parse anything.
    pub fn update_command(command: Command) -> Command {
        debug!(command = command.get_name(), "registering logging flags");
        <Self as Args>::augment_args(command)
    }

    /// Copy the parsed flag values out of `matches`.
    ///
    /// `matches` must come from a command that went through [`LogFlags::update_command`].
    /// Flags that were not given on the command line read as `false`.
    pub fn update_from_matches(&mut self, matches: &ArgMatches) -> LoggerResult<()> {
        self.update_from_arg_matches(matches)?;
        debug!(flags = ?self, "logging flags parsed");
        Ok(())
    }

    /// Whether no switch is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
