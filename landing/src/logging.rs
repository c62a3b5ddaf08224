//! `tracing` output for the browser.
//!
//! Formatted events are collected per event and flushed to `console.log`,
//! `console.warn` or `console.error` depending on level.

use std::io;

use tracing::{Level, Metadata, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

/// Install the console subscriber. Calling it again is a no-op.
pub fn init(directive: &str) {
    let (filter, invalid) = parse_filter(directive);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(ConsoleMakeWriter)
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .try_init();

    if let Some(err) = invalid {
        warn!(directive, %err, "invalid log filter, falling back to `info`");
    }
}

const FALLBACK_FILTER: &str = "info";

/// Parse `directive`, or fall back to `info` and hand back the parse error.
fn parse_filter(directive: &str) -> (EnvFilter, Option<ParseError>) {
    match EnvFilter::try_new(directive) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(FALLBACK_FILTER), Some(err)),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event; the console call happens on drop.
#[derive(Debug)]
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buf: Vec::new(),
        }
    }

    fn take_line(&mut self) -> Option<String> {
        if self.buf.is_empty() {
            return None;
        }
        let text = String::from_utf8_lossy(&self.buf).trim_end().to_string();
        self.buf.clear();
        Some(text)
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let Some(line) = self.take_line() else {
            return;
        };
        let line = JsValue::from_str(&line);
        match console_method(self.level) {
            ConsoleMethod::Error => web_sys::console::error_1(&line),
            ConsoleMethod::Warn => web_sys::console::warn_1(&line),
            ConsoleMethod::Log => web_sys::console::log_1(&line),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum ConsoleMethod {
    Error,
    Warn,
    Log,
}

fn console_method(level: Level) -> ConsoleMethod {
    if level == Level::ERROR {
        ConsoleMethod::Error
    } else if level == Level::WARN {
        ConsoleMethod::Warn
    } else {
        ConsoleMethod::Log
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn levels_map_to_console_methods() {
        assert_eq!(console_method(Level::ERROR), ConsoleMethod::Error);
        assert_eq!(console_method(Level::WARN), ConsoleMethod::Warn);
        assert_eq!(console_method(Level::INFO), ConsoleMethod::Log);
        assert_eq!(console_method(Level::TRACE), ConsoleMethod::Log);
    }

    #[test]
    fn valid_directive_is_kept() {
        let (filter, err) = parse_filter("hostelhome_landing=debug");
        assert!(err.is_none());
        assert_eq!(filter.to_string(), "hostelhome_landing=debug");
    }

    #[test]
    fn invalid_directive_reports_error_and_falls_back() {
        let (filter, err) = parse_filter("hostelhome_landing=loud");
        assert!(err.is_some());
        assert_eq!(filter.to_string(), "info");
    }

    #[test]
    fn writer_buffers_a_single_trimmed_line() {
        let mut writer = ConsoleWriter::new(Level::INFO);
        writer.write_all(b" INFO landing: mounted").unwrap();
        writer.write_all(b"\n").unwrap();
        assert_eq!(writer.take_line().as_deref(), Some(" INFO landing: mounted"));
        assert_eq!(writer.take_line(), None);
        // Buffer is empty now, so dropping does not touch the console.
    }
}
