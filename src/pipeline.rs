//! ## Adjustment Pipeline
//!
//! This module turns parsed [`LogFlags`] into logger adjustments. Instead of nested
//! conditionals, derivation is an ordered list of named steps; each step has a
//! condition over the flags and an effect on the logger.
//!
//! ### Overview
//!
//! - The [`Adjustment`] trait is the interface of one step.
//! - [`Step`] is an adjustment built from two plain functions.
//! - [`Pipeline`] applies its steps in order, so later steps override earlier ones
//!   where they conflict.
//! - [`Pipeline::standard`] is the precedence used by
//!   [`LoggerGenerator`](crate::generator::LoggerGenerator):
//!
//! | step      | condition | effect                                       |
//! |-----------|-----------|----------------------------------------------|
//! | `trace`   | `trace`   | level `TRACE`, enable call site              |
//! | `debug`   | `debug`   | level `DEBUG`, enable call site              |
//! | `verbose` | `verbose` | level `DEBUG`, call site unchanged           |
//! | `quiet`   | `quiet`   | level `WARN`, call site unchanged            |
//! | `silent`  | `silent`  | discard everything, no-op logger             |
//!
//! Note that `quiet` does not clear the call site: `--debug --quiet` keeps `WARN` and
//! `ERROR` records and annotates them with their call site.

use crate::flags::LogFlags;
use crate::logger::Logger;
use tracing::{debug, Level};

/// One step of logger derivation.
pub trait Adjustment<W> {
    /// Name used in diagnostics.
    fn name(&self) -> &str;

    /// Whether this step applies to the given flags.
    fn applies(&self, flags: &LogFlags) -> bool;

    /// Apply the effect of this step.
    fn apply(&self, logger: Logger<W>) -> Logger<W>;
}

/// An adjustment made of a named condition and effect.
pub struct Step<W> {
    name: &'static str,
    condition: fn(&LogFlags) -> bool,
    effect: fn(Logger<W>) -> Logger<W>,
}

impl<W> Step<W> {
    pub fn new(
        name: &'static str,
        condition: fn(&LogFlags) -> bool,
        effect: fn(Logger<W>) -> Logger<W>,
    ) -> Self {
        Self {
            name,
            condition,
            effect,
        }
    }
}

impl<W> Adjustment<W> for Step<W> {
    fn name(&self) -> &str {
        self.name
    }

    fn applies(&self, flags: &LogFlags) -> bool {
        (self.condition)(flags)
    }

    fn apply(&self, logger: Logger<W>) -> Logger<W> {
        (self.effect)(logger)
    }
}

/// An ordered sequence of adjustments.
pub struct Pipeline<W> {
    steps: Vec<Box<dyn Adjustment<W> + Send + Sync>>,
}

impl<W: 'static> Pipeline<W> {
    /// Creates a new pipeline from already boxed steps.
    pub fn new(steps: Vec<Box<dyn Adjustment<W> + Send + Sync>>) -> Self {
        Self { steps }
    }

    /// The fixed precedence of the logging flags.
    pub fn standard() -> Self {
        crate::make_pipeline!(
            ("trace", |f| f.trace, |l| l.level(Level::TRACE).with_call_site()),
            ("debug", |f| f.debug, |l| l.level(Level::DEBUG).with_call_site()),
            ("verbose", |f| f.verbose, |l| l.level(Level::DEBUG)),
            ("quiet", |f| f.quiet, |l| l.level(Level::WARN)),
            ("silent", |f| f.silent, |l| l.nop()),
        )
    }

    /// Names of the steps, in application order.
    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|step| step.name()).collect()
    }

    /// Apply every step whose condition holds, in order, starting from `base`.
    pub fn run(&self, flags: &LogFlags, base: Logger<W>) -> Logger<W> {
        let mut logger = base;
        for step in self.steps.iter() {
            if step.applies(flags) {
                logger = step.apply(logger);
                debug!(
                    step = step.name(),
                    max_level = %logger.max_level(),
                    call_site = logger.has_call_site(),
                    "applied logging adjustment"
                );
            }
        }
        logger
    }
}

/// Macro to build a [`Pipeline`] from `(name, condition, effect)` triples.
///
/// Conditions and effects must be non-capturing closures or plain functions.
///
/// # Example
///
/// ```rust
/// use tracing::Level;
/// use tracing_cli_adapter::flags::LogFlags;
/// use tracing_cli_adapter::logger::Logger;
/// use tracing_cli_adapter::make_pipeline;
/// use tracing_cli_adapter::pipeline::Pipeline;
///
/// let pipeline: Pipeline<_> = make_pipeline!(
///     ("quiet", |f| f.quiet, |l| l.level(Level::WARN)),
/// );
/// let flags = LogFlags { quiet: true, ..LogFlags::default() };
/// let logger = pipeline.run(&flags, Logger::new());
/// assert!(!logger.enabled(&Level::INFO));
/// ```
#[macro_export]
macro_rules! make_pipeline {
    ($(($name:expr, $condition:expr, $effect:expr)),+ $(,)?) => {
        {
            let steps = vec![
                $(
                    Box::new($crate::pipeline::Step::new($name, $condition, $effect))
                        as Box<dyn $crate::pipeline::Adjustment<_> + Send + Sync>,
                )+
            ];
            $crate::pipeline::Pipeline::new(steps)
        }
    };
}
