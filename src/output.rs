//! Injectable output: the print hook the host supplies, and the sinks
//! shipped for common hosts.
//!
//! The core never writes to stdout on its own. Every log line is formatted
//! with [`fmt`](crate::format::fmt) and handed to whatever [`OutputSink`]
//! the host injected via [`Harness::set_print_fn`](crate::harness::Harness::set_print_fn).

use crate::format::fmt;
use crate::value::Value;

/// Output sink for log lines, to make I/O testable and injectable.
///
/// Any `FnMut(&str)` closure is a sink, so a host can pass a bare
/// print function.
pub trait OutputSink {
    fn emit(&mut self, line: &str);
}

impl<F: FnMut(&str)> OutputSink for F {
    fn emit(&mut self, line: &str) {
        self(line)
    }
}

/// Writes lines to stdout, for console hosts and default runner use.
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn emit(&mut self, line: &str) {
        println!("{}", line);
    }
}

/// Collects lines into a newline-joined string, for testing or
/// programmatic capture.
pub struct OutputBuffer {
    pub buffer: String,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputSink for OutputBuffer {
    fn emit(&mut self, line: &str) {
        if !self.buffer.is_empty() {
            self.buffer.push('\n');
        }
        self.buffer.push_str(line);
    }
}

/// Discards all output.
pub struct NullSink;

impl OutputSink for NullSink {
    fn emit(&mut self, _line: &str) {}
}

/// The log channel handed down through a run.
///
/// A logger starts unconfigured; the host must inject a sink before
/// anything logs. Logging through an unconfigured logger is a fatal
/// configuration error, not a test failure.
pub struct Logger {
    sink: Option<Box<dyn OutputSink + Send>>,
}

impl Logger {
    /// A logger with no sink attached.
    pub fn unconfigured() -> Self {
        Logger { sink: None }
    }

    /// A logger writing to the given sink.
    pub fn with_sink(sink: Box<dyn OutputSink + Send>) -> Self {
        Logger { sink: Some(sink) }
    }

    pub fn set_sink(&mut self, sink: Box<dyn OutputSink + Send>) {
        self.sink = Some(sink);
    }

    pub fn is_configured(&self) -> bool {
        self.sink.is_some()
    }

    /// Formats `template` with `args` and emits one line.
    ///
    /// # Panics
    ///
    /// Panics if no sink has been injected.
    pub fn log(&mut self, template: &str, args: &[Value]) {
        match self.sink.as_mut() {
            Some(sink) => sink.emit(&fmt(template, args)),
            None => panic!("no print hook configured: call set_print_fn before logging"),
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Logger::unconfigured()
    }
}
