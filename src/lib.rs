//! # Rust Level Logger
//!
//! A pluggable leveled-logging facade: one [`Logger`] contract, a bitmask
//! [`Level`] model, and a [`Registry`] of named backends that applications
//! choose between at runtime.
//!
//! ## Features
//!
//! - **Combinable levels**: severities are bit flags; setting a threshold
//!   activates every less verbose severity too
//! - **Four call shapes**: plain, newline, printf and keyed, for every severity
//! - **Backends**: `discard`, `stdlog` (console, text/json/logfmt) and
//!   `tracing` (bridge to `tracing-subscriber`)
//! - **Process-wide logger**: free functions in [`global`]
//!
//! ## Example
//!
//! ```
//! use rust_level_logger::prelude::*;
//!
//! let registry = Registry::with_builtins();
//! let buffer = SharedBuffer::new();
//! let options = Options::new().with("disableColor", true);
//!
//! let logger = registry
//!     .new_logger_with_options(STDLOG_NAME, Box::new(buffer.clone()), Level::INFO, &options)
//!     .unwrap();
//!
//! logger.info(&[&"listening on port ", &8080]);
//! logger.debug(&[&"not shown"]);
//! logger.infow("request", &[Field::new("path", "/health"), Field::new("status", 200)]);
//!
//! assert_eq!(buffer.lines().len(), 2);
//! ```

pub mod backends;
pub mod core;
pub mod global;
pub mod macros;

pub mod prelude {
    pub use crate::backends::{DiscardConstructor, DiscardLogger, DISCARD_NAME};
    #[cfg(feature = "console")]
    pub use crate::backends::{ConsoleConstructor, ConsoleLogger, STDLOG_NAME};
    #[cfg(feature = "tracing-bridge")]
    pub use crate::backends::{TracingConstructor, TracingLogger, TRACING_NAME};
    pub use crate::core::{
        Constructor, EntryBuilder, Field, FieldValue, Level, LogPanic, Logger, LoggerError,
        OptionValue, Options, OutputFormat, Registry, Result, SharedBuffer, Sink, TimestampFormat,
    };
}

pub use backends::{DiscardConstructor, DiscardLogger, DISCARD_NAME};
#[cfg(feature = "console")]
pub use backends::{ConsoleConstructor, ConsoleLogger, STDLOG_NAME};
#[cfg(feature = "tracing-bridge")]
pub use backends::{TracingConstructor, TracingLogger, TRACING_NAME};
pub use core::{
    as_string, as_string_quoted, fields_to_map, format_fields, pair_fields, separate_fields,
    simple_format, ActiveLevel, Constructor, EntryBuilder, ExitHook, Field, FieldValue, Level,
    LogPanic, Logger, LoggerError, OptionValue, Options, OutputFormat, Registry, Result,
    SharedBuffer, Sink, TimestampFormat, FATAL_EXIT_CODE, UNKNOWN_FIELD_NAME,
};
