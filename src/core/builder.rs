//! Fluent construction of keyed log calls
//!
//! Provides a builder pattern for attaching typed fields to a message,
//! avoiding hand-written field slices.

use super::field::{Field, FieldValue};
use super::level::Level;
use super::logger::Logger;

/// Builder for keyed log calls
///
/// # Example
///
/// ```
/// use rust_level_logger::prelude::*;
///
/// let logger = DiscardLogger::new(Level::ALL);
/// let logger: &dyn Logger = &logger;
///
/// logger.entry(Level::INFO)
///     .message("Request processed")
///     .field("user_id", 12345)
///     .field("latency_ms", 42.5)
///     .log();
/// ```
pub struct EntryBuilder<'a> {
    logger: &'a dyn Logger,
    level: Level,
    message: String,
    fields: Vec<Field>,
}

impl<'a> EntryBuilder<'a> {
    pub fn new(logger: &'a dyn Logger, level: Level) -> Self {
        Self {
            logger,
            level,
            message: String::new(),
            fields: Vec::new(),
        }
    }

    /// Set the log message
    #[must_use]
    pub fn message(mut self, msg: impl Into<String>) -> Self {
        self.message = msg.into();
        self
    }

    /// Add a structured field
    #[must_use]
    pub fn field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.push(Field::new(key, value));
        self
    }

    /// Add already built fields
    #[must_use]
    pub fn fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Emit the call.
    ///
    /// `FATAL` exits the process and `PANIC` unwinds, as the dedicated
    /// methods do.
    pub fn log(self) {
        match self.level {
            Level::FATAL => self.logger.fatalw(&self.message, &self.fields),
            Level::PANIC => self.logger.panicw(&self.message, &self.fields),
            level => self.logger.logw(level, &self.message, &self.fields),
        }
    }
}

impl<'l> dyn Logger + 'l {
    /// Start a keyed call at `level`
    pub fn entry(&self, level: Level) -> EntryBuilder<'_> {
        EntryBuilder::new(self, level)
    }
}
