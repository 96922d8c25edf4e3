//! Console backend
//!
//! Writes one line per call to any [`Sink`]. All writes go through a single
//! lock that also guards a reusable line buffer, so lines from concurrent
//! callers never interleave.
//!
//! Recognized options:
//!
//! | key               | type   | default                     |
//! |-------------------|--------|-----------------------------|
//! | `timestampFormat` | string | `%Y/%m/%d %H:%M:%S %Z`      |
//! | `disableColor`    | bool   | `false`                     |
//! | `formatter`       | string | `text` (`json`, `logfmt`)   |

use crate::core::{
    process_exit, ActiveLevel, Constructor, ExitHook, Field, Level, Logger,
    Options, OutputFormat, Record, Result, Sink, TimestampFormat, DEFAULT_TIMESTAMP_FORMAT,
};
use colored::Colorize;
use parking_lot::Mutex;
use std::io::{self, Write};

/// Registry name of the console backend
pub const STDLOG_NAME: &str = "stdlog";

pub const OPT_TIMESTAMP_FORMAT: &str = "timestampFormat";
pub const OPT_DISABLE_COLOR: &str = "disableColor";
pub const OPT_FORMATTER: &str = "formatter";

pub struct ConsoleConstructor;

impl Constructor for ConsoleConstructor {
    fn new_with_options(&self, sink: Sink, level: Level, options: &Options) -> Result<Box<dyn Logger>> {
        Ok(Box::new(ConsoleLogger::with_options(sink, level, options)?))
    }
}

struct Output {
    sink: Sink,
    buf: Vec<u8>,
}

pub struct ConsoleLogger {
    level: ActiveLevel,
    out: Mutex<Output>,
    use_colors: bool,
    timestamp_format: TimestampFormat,
    output_format: OutputFormat,
    exit_hook: ExitHook,
}

impl ConsoleLogger {
    pub fn new(sink: Sink, level: Level) -> Self {
        Self {
            level: ActiveLevel::new(level),
            out: Mutex::new(Output {
                sink,
                buf: Vec::with_capacity(256),
            }),
            use_colors: true,
            timestamp_format: TimestampFormat::default(),
            output_format: OutputFormat::default(),
            exit_hook: process_exit,
        }
    }

    /// Console logger on standard output
    pub fn stdout(level: Level) -> Self {
        Self::new(Box::new(io::stdout()), level)
    }

    pub fn with_options(sink: Sink, level: Level, options: &Options) -> Result<Self> {
        let mut logger = Self::new(sink, level);
        if options.is_empty() {
            return Ok(logger);
        }

        logger.timestamp_format = TimestampFormat::from_option(
            &options.get_string(OPT_TIMESTAMP_FORMAT, DEFAULT_TIMESTAMP_FORMAT),
        )?;
        logger.use_colors = !options.get_bool(OPT_DISABLE_COLOR, false);
        logger.output_format = OutputFormat::from_option(&options.get_string(OPT_FORMATTER, "text"))?;
        Ok(logger)
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Set the timestamp format for this logger
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_level_logger::backends::ConsoleLogger;
    /// use rust_level_logger::{Level, TimestampFormat};
    ///
    /// let logger = ConsoleLogger::stdout(Level::INFO)
    ///     .with_timestamp_format(TimestampFormat::Rfc3339);
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Set the output format for this logger
    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Run `hook` before the process exits on a fatal call
    #[must_use]
    pub fn with_exit_hook(mut self, hook: ExitHook) -> Self {
        self.exit_hook = hook;
        self
    }

    fn colorize(&self, text: &str, level: Level) -> String {
        if self.use_colors {
            text.color(level.color()).to_string()
        } else {
            text.to_string()
        }
    }

    fn write_record(&self, record: &Record<'_>) {
        let mut out = self.out.lock();
        let Output { sink, buf } = &mut *out;

        let line = match self.output_format {
            OutputFormat::Text => OutputFormat::format_text_with(record, &self.timestamp_format, |text, level| {
                self.colorize(text, level)
            }),
            format => format.format(record, &self.timestamp_format),
        };
        buf.extend_from_slice(line.as_bytes());
        if buf.last() != Some(&b'\n') {
            buf.push(b'\n');
        }

        if let Err(e) = sink.write_all(buf).and_then(|()| sink.flush()) {
            eprintln!("[LOGGER ERROR] Console logger failed to write: {}", e);
        }
        buf.clear();
    }
}

impl Logger for ConsoleLogger {
    fn has_level(&self, level: Level) -> bool {
        self.level.has(level)
    }

    fn set_level(&self, level: Level) {
        self.level.set(level);
    }

    fn output(&self, level: Level, message: &str) {
        self.write_record(&Record::new(level, message));
    }

    fn output_fields(&self, level: Level, message: &str, fields: &[Field]) {
        self.write_record(&Record::new(level, message).with_fields(fields));
    }

    fn exit(&self, code: i32) -> ! {
        (self.exit_hook)(code);
        std::process::exit(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SharedBuffer;

    fn plain_logger(level: Level) -> (ConsoleLogger, SharedBuffer) {
        let buffer = SharedBuffer::new();
        let logger = ConsoleLogger::new(Box::new(buffer.clone()), level)
            .with_colors(false)
            .with_timestamp_format(TimestampFormat::Unix);
        (logger, buffer)
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_plain_line_shape() {
        let (logger, buffer) = plain_logger(Level::TRACE);
        logger.info(&[&"listening on ", &8080]);

        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("INFOO ["));
        assert!(lines[0].ends_with("] listening on 8080"));
    }

    #[test]
    fn test_newline_shape_ends_with_single_newline() {
        let (logger, buffer) = plain_logger(Level::TRACE);
        logger.warnln(&[&"disk", &"low"]);

        let contents = buffer.contents();
        assert!(contents.ends_with("] disk low\n"));
        assert!(!contents.ends_with("\n\n"));
    }

    #[test]
    fn test_keyed_line_shape() {
        let (logger, buffer) = plain_logger(Level::DEBUG);
        logger.debugw(
            "request",
            &crate::fields!["path", "/health", "status", 200, "slow"],
        );

        let line = buffer.contents();
        assert!(line.starts_with("DEBUG ["));
        assert!(line.ends_with("] request\tpath=\"/health\" status=200 @logfield-03=\"slow\"\n"));
    }

    #[test]
    fn test_inactive_levels_write_nothing() {
        let (logger, buffer) = plain_logger(Level::WARN);
        logger.info(&[&"hidden"]);
        logger.debugf(format_args!("hidden {}", 1));
        logger.tracew("hidden", &[]);
        assert!(buffer.is_empty());

        logger.set_level(Level::INFO);
        logger.print(&[&"shown"]);
        assert_eq!(buffer.lines().len(), 1);
    }

    #[test]
    fn test_json_output() {
        let buffer = SharedBuffer::new();
        let options = Options::new().with(OPT_FORMATTER, "json");
        let logger = ConsoleLogger::with_options(Box::new(buffer.clone()), Level::INFO, &options)
            .unwrap();

        logger.errorw("db down", &[Field::new("retries", 3)]);

        let parsed: serde_json::Value = serde_json::from_str(buffer.contents().trim_end()).unwrap();
        assert_eq!(parsed["@level"], "error");
        assert_eq!(parsed["@msg"], "db down");
        assert_eq!(parsed["retries"], 3);
    }

    #[test]
    fn test_logfmt_output() {
        let buffer = SharedBuffer::new();
        let options = Options::new()
            .with(OPT_FORMATTER, "logfmt")
            .with(OPT_TIMESTAMP_FORMAT, "unix");
        let logger = ConsoleLogger::with_options(Box::new(buffer.clone()), Level::INFO, &options)
            .unwrap();

        logger.infow("ok", &[Field::new("user", "alice")]);
        let line = buffer.contents();
        assert!(line.contains("@level=info"));
        assert!(line.contains("@msg=\"ok\""));
        assert!(line.contains("user=\"alice\""));
    }

    #[test]
    fn test_custom_timestamp_option() {
        let buffer = SharedBuffer::new();
        let options = Options::new()
            .with(OPT_TIMESTAMP_FORMAT, "year %Y")
            .with(OPT_DISABLE_COLOR, true);
        let logger = ConsoleLogger::with_options(Box::new(buffer.clone()), Level::INFO, &options)
            .unwrap();

        logger.info(&[&"hello"]);
        let line = buffer.contents();
        assert!(line.starts_with("INFOO [year 2"));
        assert!(line.ends_with("] hello\n"));
    }

    #[test]
    fn test_invalid_options_rejected() {
        let bad_formatter = Options::new().with(OPT_FORMATTER, "xml");
        assert!(ConsoleLogger::with_options(Box::new(io::sink()), Level::INFO, &bad_formatter).is_err());

        let bad_timestamp = Options::new().with(OPT_TIMESTAMP_FORMAT, "%Q");
        assert!(ConsoleLogger::with_options(Box::new(io::sink()), Level::INFO, &bad_timestamp).is_err());
    }

    #[test]
    fn test_write_failure_is_not_raised() {
        let logger = ConsoleLogger::new(Box::new(BrokenSink), Level::INFO);
        logger.info(&[&"lost"]);
        logger.info(&[&"lost again"]);
        // the buffer is reset even when the sink fails
        assert!(logger.out.lock().buf.is_empty());
    }

    #[test]
    fn test_constructor_via_trait() {
        let buffer = SharedBuffer::new();
        let logger = ConsoleConstructor
            .new(Box::new(buffer.clone()), Level::ERROR)
            .unwrap();
        assert!(logger.has_level(Level::PANIC));
        assert!(!logger.has_level(Level::WARN));
        logger.errorf(format_args!("code {}", 500));
        assert!(buffer.contents().contains("code 500"));
    }
}
