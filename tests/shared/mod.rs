#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};
use tracing::{debug, error, info, trace, warn};
use tracing_cli_adapter::{Logger, LoggerGenerator};
use tracing_subscriber::fmt::MakeWriter;

/// Levels in order, least to most restrictive.
pub const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A writer that keeps everything written to it in memory.
#[derive(Clone, Debug, Default)]
pub struct CaptureWriter {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl CaptureWriter {
    /// Return what was written so far and clear the buffer.
    pub fn read_and_reset(&self) -> String {
        let mut buf = self.buf.lock().unwrap();
        let out = String::from_utf8(buf.clone()).unwrap();
        buf.clear();
        out
    }
}

impl io::Write for CaptureWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.lock().unwrap().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CaptureWriter {
    type Writer = CaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// A base logger with stable output: no colors, no timestamps, no target.
pub fn test_logger() -> (Logger<CaptureWriter>, CaptureWriter) {
    let writer = CaptureWriter::default();
    let logger = Logger::with_writer(writer.clone())
        .with_ansi(false)
        .with_timestamps(false)
        .with_target(false);
    (logger, writer)
}

/// Emit one record per level.
pub fn emit_all() {
    trace!("hello trace");
    debug!("hello debug");
    info!("hello info");
    warn!("hello warn");
    error!("hello error");
}

/// Register the flags on a fresh command, parse `args`, and read the values back.
pub fn parse_flags(args: &[&str]) -> (LoggerGenerator<CaptureWriter>, CaptureWriter) {
    let (base, writer) = test_logger();
    let mut generator = LoggerGenerator::new(base);
    let command = generator.update_command(clap::Command::new("flaggles"));
    let matches = command
        .try_get_matches_from(std::iter::once("flaggles").chain(args.iter().copied()))
        .expect("arguments should parse");
    generator.update_from_matches(&matches).unwrap();
    (generator, writer)
}

/// Parse `args`, derive the logger and emit one record per level through it.
pub fn run_flags(args: &[&str]) -> (LoggerGenerator<CaptureWriter>, String) {
    let (generator, writer) = parse_flags(args);
    generator.logger().scoped(emit_all);
    let output = writer.read_and_reset();
    (generator, output)
}

/// Check `output` holds exactly one line per level from `min_level` up, in order,
/// each with or without a call site.
pub fn assert_output(output: &str, min_level: &str, call_site: bool) {
    let start = LEVELS
        .iter()
        .position(|l| *l == min_level)
        .expect("known level");
    let expected = &LEVELS[start..];
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines.len(),
        expected.len(),
        "expected levels {:?}, got output {:?}",
        expected,
        output
    );
    for (line, level) in lines.iter().zip(expected) {
        assert!(
            line.contains(&level.to_uppercase()),
            "line {:?} should be at level {}",
            line,
            level
        );
        assert!(
            line.ends_with(&format!("hello {}", level)),
            "line {:?} should carry message for {}",
            line,
            level
        );
        assert_eq!(
            line.contains("mod.rs:"),
            call_site,
            "line {:?} call site annotation mismatch",
            line
        );
    }
}
