//! ## Diagnostics Configuration
//!
//! This module sets up the crate's own diagnostic logging at program startup using the
//! `ctor` crate. It is unrelated to the loggers the crate derives for its callers; it
//! only shows what the crate itself does (flag registration, flag values, and which
//! adjustments were applied).
//!
//! Behavior is controlled by the `DEBUG_TRACING_CLI_ADAPTER` environment variable:
//!
//! - **Disabled** (default): If the variable is unset, empty, or explicitly set to `"0"` or `"false"`,
//!   no logging will be initialized.
//! - **Enabled**: Any other value enables logging to stderr with a maximum log level of `DEBUG`.
//!
//! When enabled, the diagnostics subscriber becomes the global default, so a later
//! [`Logger::init`](crate::logger::Logger::init) call reports an error.
//!
//! ### Usage Example
//!
//! ```sh
//! export DEBUG_TRACING_CLI_ADAPTER=true
//! ```

use ctor::ctor;
use tracing::Level;

/// Name of the environment variable that enables diagnostics.
pub const DEBUG_ENV_VAR: &str = "DEBUG_TRACING_CLI_ADAPTER";

/// Whether an environment variable value turns diagnostics on.
pub(crate) fn is_enabled(value: Option<&str>) -> bool {
    value.is_some_and(|v| !(v.is_empty() || v == "0" || v == "false"))
}

#[ctor]
fn set_debug_level() {
    let value = std::env::var(DEBUG_ENV_VAR).ok();
    if is_enabled(value.as_deref()) {
        // Someone else may already own the global default.
        let _ = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_writer(std::io::stderr)
            .try_init();
    }
}
