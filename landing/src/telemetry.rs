// Console logging for the browser build.
//
// `tracing_subscriber::fmt` formats each event into a `ConsoleWriter`; the
// buffered line goes to the devtools console when the writer is dropped,
// routed to the console method matching the event level.

use std::io::{self, Write};

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

pub fn init(level: Level) {
    let result = tracing_subscriber::fmt()
        .with_writer(MakeConsoleWriter)
        .with_max_level(level)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .try_init();

    // A second mount (hot reload) finds the subscriber already installed.
    if result.is_ok() {
        tracing::info!(level = %level, "console logging ready");
    }
}

struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buffer: Vec::with_capacity(128),
        }
    }
}

impl Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let Some(line) = console_line(&self.buffer) else {
            return;
        };
        let line = wasm_bindgen::JsValue::from(line);
        match self.level {
            Level::ERROR => web_sys::console::error_1(&line),
            Level::WARN => web_sys::console::warn_1(&line),
            Level::INFO => web_sys::console::info_1(&line),
            _ => web_sys::console::debug_1(&line),
        }
    }
}

/// Text of one formatted event, without the trailing newline.
fn console_line(buffer: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(buffer);
    let text = text.trim_end_matches(['\n', '\r']);
    (!text.is_empty()).then(|| text.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_newline() {
        assert_eq!(
            console_line(b" INFO contact form sent\n").as_deref(),
            Some(" INFO contact form sent")
        );
        assert_eq!(console_line(b"line\r\n").as_deref(), Some("line"));
    }

    #[test]
    fn empty_buffers_are_not_logged() {
        assert_eq!(console_line(b""), None);
        assert_eq!(console_line(b"\n"), None);
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let line = console_line(b"bad \xff byte\n").unwrap();
        assert!(line.starts_with("bad "));
        assert!(line.ends_with(" byte"));
    }
}
