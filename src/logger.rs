//! ## Base Logger
//!
//! [`Logger`] is the logger handle the rest of the crate works with. It is a plain,
//! cloneable description of a `tracing_subscriber::fmt` subscriber: where records go
//! (the writer), the minimum severity that is kept, and whether records carry their
//! call site (source file and line number).
//!
//! A caller builds a base logger once, hands it to a
//! [`LoggerGenerator`](crate::generator::LoggerGenerator), and gets back a derived copy
//! with the adjustments requested on the command line. Nothing is installed until
//! [`Logger::init`] or [`Logger::scoped`] is called.
//!
//! Severity ordering, least to most restrictive: `TRACE < DEBUG < INFO < WARN < ERROR`.
//! Records at or above [`Logger::max_level`] are kept, the rest are dropped.

use crate::exceptions::LoggerResult;
use std::io;
use tracing::level_filters::LevelFilter;
use tracing::subscriber::NoSubscriber;
use tracing::{Dispatch, Level};
use tracing_subscriber::fmt::MakeWriter;

/// Writer used by [`Logger::new`].
pub type StderrWriter = fn() -> io::Stderr;

/// A description of a structured logger.
///
/// All adjustment methods consume the logger and return a new one, so a base logger
/// can be cloned and adjusted without affecting the original.
#[derive(Clone, Debug)]
pub struct Logger<W = StderrWriter> {
    writer: W,
    max_level: LevelFilter,
    call_site: bool,
    ansi: bool,
    timestamps: bool,
    target: bool,
}

impl Logger<StderrWriter> {
    /// Create a logger writing to stderr at `INFO` without call site annotation.
    pub fn new() -> Self {
        Self::with_writer(io::stderr as StderrWriter)
    }
}

impl Default for Logger<StderrWriter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Logger<W> {
    /// Create a logger writing to `writer` at `INFO` without call site annotation.
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            max_level: LevelFilter::INFO,
            call_site: false,
            ansi: true,
            timestamps: true,
            target: true,
        }
    }

    /// Set the minimum severity of kept records.
    pub fn level(mut self, level: impl Into<LevelFilter>) -> Self {
        self.max_level = level.into();
        self
    }

    /// Attach the source file and line number to every emitted record.
    pub fn with_call_site(mut self) -> Self {
        self.call_site = true;
        self
    }

    /// Enable or disable ANSI colors in the formatted output.
    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    /// Enable or disable the timestamp prefix.
    pub fn with_timestamps(mut self, timestamps: bool) -> Self {
        self.timestamps = timestamps;
        self
    }

    /// Enable or disable printing the record's target.
    pub fn with_target(mut self, target: bool) -> Self {
        self.target = target;
        self
    }

    /// Turn this logger into one that discards every record.
    ///
    /// Every earlier adjustment is dropped. Only the writer is kept, and it is never
    /// written to.
    pub fn nop(self) -> Self {
        Self::with_writer(self.writer).level(LevelFilter::OFF)
    }

    /// The minimum severity of kept records.
    pub fn max_level(&self) -> LevelFilter {
        self.max_level
    }

    /// Whether records carry their source file and line number.
    pub fn has_call_site(&self) -> bool {
        self.call_site
    }

    /// Whether this logger discards everything.
    pub fn is_nop(&self) -> bool {
        self.max_level == LevelFilter::OFF
    }

    /// The writer records are sent to.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Whether a record at `level` would be kept.
    pub fn enabled(&self, level: &Level) -> bool {
        // LevelFilter orders by verbosity: a level passes when it is no more
        // verbose than the filter.
        self.max_level >= *level
    }
}

impl<W> Logger<W>
where
    W: for<'a> MakeWriter<'a> + Clone + Send + Sync + 'static,
{
    /// Build the subscriber described by this logger.
    pub fn dispatch(&self) -> Dispatch {
        if self.is_nop() {
            return Dispatch::new(NoSubscriber::default());
        }

        let builder = tracing_subscriber::fmt()
            .with_writer(self.writer.clone())
            .with_max_level(self.max_level)
            .with_ansi(self.ansi)
            .with_target(self.target)
            .with_file(self.call_site)
            .with_line_number(self.call_site);

        if self.timestamps {
            Dispatch::new(builder.finish())
        } else {
            Dispatch::new(builder.without_time().finish())
        }
    }

    /// Install this logger as the process-wide default.
    ///
    /// Fails if a global default has already been set.
    pub fn init(&self) -> LoggerResult<()> {
        tracing::dispatcher::set_global_default(self.dispatch())?;
        Ok(())
    }

    /// Run `f` with this logger as the default for the current thread.
    pub fn scoped<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_logger_is_info_without_call_site() {
        let logger = Logger::new();
        assert_eq!(logger.max_level(), LevelFilter::INFO);
        assert!(!logger.has_call_site());
        assert!(!logger.is_nop());
    }

    #[test]
    fn test_enabled_follows_severity_ordering() {
        let logger = Logger::new().level(Level::WARN);
        assert!(!logger.enabled(&Level::TRACE));
        assert!(!logger.enabled(&Level::DEBUG));
        assert!(!logger.enabled(&Level::INFO));
        assert!(logger.enabled(&Level::WARN));
        assert!(logger.enabled(&Level::ERROR));

        let logger = logger.level(Level::TRACE);
        assert!(logger.enabled(&Level::TRACE));
    }

    #[test]
    fn test_nop_discards_prior_adjustments() {
        let logger = Logger::new()
            .level(Level::TRACE)
            .with_call_site()
            .with_ansi(false)
            .nop();
        assert!(logger.is_nop());
        assert!(!logger.has_call_site());
        for level in [Level::TRACE, Level::DEBUG, Level::INFO, Level::WARN, Level::ERROR] {
            assert!(!logger.enabled(&level));
        }
    }

    #[test]
    fn test_adjustments_do_not_touch_the_original() {
        let base = Logger::new();
        let derived = base.clone().level(Level::DEBUG).with_call_site();
        assert_eq!(base.max_level(), LevelFilter::INFO);
        assert!(!base.has_call_site());
        assert_eq!(derived.max_level(), LevelFilter::DEBUG);
        assert!(derived.has_call_site());
    }
}
