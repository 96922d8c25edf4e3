//! Timestamp formatting utilities
//!
//! Provides configurable timestamp formats for log output. Backends read the
//! `timestampFormat` option through [`TimestampFormat::from_option`], which
//! accepts a few well-known names or any strftime string.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// Default strftime layout of the console backend: `2025/01/08 10:30:45 UTC`
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S %Z";

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use rust_level_logger::core::TimestampFormat;
/// use chrono::Utc;
///
/// let format = TimestampFormat::Iso8601;
/// let timestamp = format.format(&Utc::now());
/// assert!(timestamp.ends_with('Z'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimestampFormat {
    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    Iso8601,

    /// RFC 3339 format: `2025-01-08T10:30:45+00:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format, validated by [`TimestampFormat::custom`]
    Custom(String),
}

impl Default for TimestampFormat {
    fn default() -> Self {
        TimestampFormat::Custom(DEFAULT_TIMESTAMP_FORMAT.to_string())
    }
}

impl TimestampFormat {
    /// Build a custom format, rejecting strings chrono cannot render
    pub fn custom(format_str: &str) -> Result<Self> {
        if StrftimeItems::new(format_str).any(|item| matches!(item, Item::Error)) {
            return Err(LoggerError::config(
                "TimestampFormat",
                format!("invalid strftime format '{}'", format_str),
            ));
        }
        Ok(TimestampFormat::Custom(format_str.to_string()))
    }

    /// Interpret a `timestampFormat` option value
    ///
    /// `iso8601`, `rfc3339`, `unix` and `unix_millis` select the named
    /// formats; anything else is treated as a strftime string.
    pub fn from_option(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "iso8601" => Ok(TimestampFormat::Iso8601),
            "rfc3339" => Ok(TimestampFormat::Rfc3339),
            "unix" => Ok(TimestampFormat::Unix),
            "unix_millis" => Ok(TimestampFormat::UnixMillis),
            _ => Self::custom(value),
        }
    }

    /// Format a timestamp in any time zone according to this format
    #[must_use]
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        match self {
            TimestampFormat::Iso8601 => datetime
                .with_timezone(&chrono::Utc)
                .format("%Y-%m-%dT%H:%M:%S%.3fZ")
                .to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }

    /// Check if this is a Unix-based numeric format
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, TimestampFormat::Unix | TimestampFormat::UnixMillis)
    }
}
