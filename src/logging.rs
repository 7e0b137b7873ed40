//! `tracing` output for the browser console.
//!
//! The fmt layer formats each event into a buffer; the buffer is flushed to
//! `console.log` / `console.warn` / `console.error` (picked by level) when the
//! writer is dropped at the end of the event. The `ansi` feature is left off,
//! so no escape codes reach the console.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConsoleLevel {
    Log,
    Warn,
    Error,
}

impl ConsoleLevel {
    fn for_level(level: &Level) -> Self {
        if *level == Level::ERROR {
            ConsoleLevel::Error
        } else if *level == Level::WARN {
            ConsoleLevel::Warn
        } else {
            ConsoleLevel::Log
        }
    }
}

pub struct ConsoleWriter {
    level: ConsoleLevel,
    buf: Vec<u8>,
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
        let text = String::from_utf8_lossy(&self.buf);
        let line = text.trim_end();
        if line.is_empty() {
            return;
        }
        let value = JsValue::from_str(line);
        match self.level {
            ConsoleLevel::Log => web_sys::console::log_1(&value),
            ConsoleLevel::Warn => web_sys::console::warn_1(&value),
            ConsoleLevel::Error => web_sys::console::error_1(&value),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter {
            level: ConsoleLevel::Log,
            buf: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter {
            level: ConsoleLevel::for_level(meta.level()),
            buf: Vec::new(),
        }
    }
}

/// Install the console subscriber. A second call is a no-op.
pub fn init(max_level: tracing::level_filters::LevelFilter) {
    let installed = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(max_level)
        .without_time()
        .with_target(false)
        .try_init();
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_level_by_severity() {
        assert_eq!(ConsoleLevel::for_level(&Level::ERROR), ConsoleLevel::Error);
        assert_eq!(ConsoleLevel::for_level(&Level::WARN), ConsoleLevel::Warn);
        assert_eq!(ConsoleLevel::for_level(&Level::INFO), ConsoleLevel::Log);
        assert_eq!(ConsoleLevel::for_level(&Level::TRACE), ConsoleLevel::Log);
    }
}
