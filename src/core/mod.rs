//! Core logger types and traits

pub mod builder;
pub mod error;
pub mod field;
pub mod level;
pub mod logger;
pub mod options;
pub mod output_format;
pub mod record;
pub mod registry;
pub mod timestamp;

pub use builder::EntryBuilder;
pub use error::{LoggerError, Result};
pub use field::{
    as_string, as_string_quoted, fields_to_map, format_fields, pair_fields, separate_fields,
    simple_format, unknown_field_name, Field, FieldValue, UNKNOWN_FIELD_NAME,
};
pub use level::{Level, LEVEL_COUNT, LEVEL_SEPARATOR};
pub use logger::{
    process_exit, sprint, sprintln, ActiveLevel, ExitHook, LogPanic, Logger, FATAL_EXIT_CODE,
};
pub use options::{OptionValue, Options};
pub use output_format::OutputFormat;
pub use record::Record;
pub use registry::{Constructor, Registry, SharedBuffer, Sink};
pub use timestamp::{TimestampFormat, DEFAULT_TIMESTAMP_FORMAT};
