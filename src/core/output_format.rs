//! Output format configuration for log records
//!
//! Provides different line formats for the console backend:
//! - Text: label, bracketed timestamp, message, tab, then `key=value` fields (default)
//! - Json: one JSON object per line
//! - Logfmt: `key=value` pairs compatible with log aggregation tools

use super::error::{LoggerError, Result};
use super::field::{as_string, as_string_quoted, FieldValue};
use super::level::Level;
use super::record::Record;
use super::timestamp::TimestampFormat;

/// Key of the timestamp in JSON and logfmt output
pub const TIME_KEY: &str = "@time";
/// Key of the level in JSON and logfmt output
pub const LEVEL_KEY: &str = "@level";
/// Key of the message in JSON and logfmt output
pub const MESSAGE_KEY: &str = "@msg";

/// Output format for log records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    ///
    /// Example: `INFOO [2025/01/08 10:30:45 UTC] Request processed\tuser="alice"`
    #[default]
    Text,

    /// JSON format for machine processing
    ///
    /// Example: `{"@time":"2025/01/08 10:30:45 UTC","@level":"info","@msg":"Request processed","user":"alice"}`
    Json,

    /// Logfmt format (key=value pairs)
    ///
    /// Example: `@time="2025/01/08 10:30:45 UTC" @level=info @msg="Request processed" user="alice"`
    Logfmt,
}

impl OutputFormat {
    /// Interpret a `formatter` option value
    pub fn from_option(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "text" | "" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "logfmt" => Ok(OutputFormat::Logfmt),
            other => Err(LoggerError::config(
                "OutputFormat",
                format!("unknown formatter '{}'", other),
            )),
        }
    }

    /// Format a record without trailing newline
    pub fn format(&self, record: &Record<'_>, timestamp_format: &TimestampFormat) -> String {
        match self {
            OutputFormat::Text => self.format_text(record, timestamp_format),
            OutputFormat::Json => self.format_json(record, timestamp_format),
            OutputFormat::Logfmt => self.format_logfmt(record, timestamp_format),
        }
    }

    /// Format as human-readable text
    fn format_text(&self, record: &Record<'_>, timestamp_format: &TimestampFormat) -> String {
        Self::format_text_with(record, timestamp_format, |text, _| text.to_string())
    }

    /// Text layout with `paint` applied to the label and every field key.
    ///
    /// The console backend passes its color decision through `paint`.
    pub fn format_text_with<F>(
        record: &Record<'_>,
        timestamp_format: &TimestampFormat,
        paint: F,
    ) -> String
    where
        F: Fn(&str, Level) -> String,
    {
        let mut line = format!(
            "{} [{}] {}",
            paint(record.level.fixed_label(), record.level),
            timestamp_format.format(&record.timestamp),
            record.message
        );

        if record.has_fields() {
            line.push('\t');
            let pairs: Vec<String> = record
                .fields
                .iter()
                .map(|f| format!("{}={}", paint(&f.key, record.level), as_string_quoted(&f.value)))
                .collect();
            line.push_str(&pairs.join(" "));
        }

        line
    }

    /// Format as JSON
    fn format_json(&self, record: &Record<'_>, timestamp_format: &TimestampFormat) -> String {
        let mut json_obj = serde_json::Map::new();

        let timestamp = if timestamp_format.is_numeric() {
            timestamp_format
                .format(&record.timestamp)
                .parse::<i64>()
                .map(serde_json::Value::from)
                .unwrap_or(serde_json::Value::Null)
        } else {
            serde_json::Value::String(timestamp_format.format(&record.timestamp))
        };
        json_obj.insert(TIME_KEY.to_string(), timestamp);
        json_obj.insert(
            LEVEL_KEY.to_string(),
            serde_json::Value::String(record.level.to_string()),
        );
        json_obj.insert(
            MESSAGE_KEY.to_string(),
            serde_json::Value::String(record.message.trim_end_matches('\n').to_string()),
        );

        for field in record.fields {
            json_obj.insert(field.key.clone(), field.value.to_json_value());
        }

        serde_json::to_string(&serde_json::Value::Object(json_obj)).unwrap_or_default()
    }

    /// Format as logfmt (key=value pairs)
    fn format_logfmt(&self, record: &Record<'_>, timestamp_format: &TimestampFormat) -> String {
        let mut parts = Vec::with_capacity(3 + record.fields.len());

        parts.push(format!(
            "{}={}",
            TIME_KEY,
            self.escape_logfmt_value(&timestamp_format.format(&record.timestamp))
        ));
        parts.push(format!("{}={}", LEVEL_KEY, record.level));
        // message is always quoted
        parts.push(format!(
            "{}={}",
            MESSAGE_KEY,
            self.quote_logfmt_value(record.message.trim_end_matches('\n'))
        ));

        for field in record.fields {
            let formatted_value = match &field.value {
                FieldValue::Null => "null".to_string(),
                value => match as_string(value) {
                    (s, true) => self.quote_logfmt_value(&s),
                    (s, false) => self.escape_logfmt_value(&s),
                },
            };
            parts.push(format!("{}={}", self.escape_logfmt_key(&field.key), formatted_value));
        }

        parts.join(" ")
    }

    /// Escape a logfmt key (remove spaces and special chars)
    fn escape_logfmt_key(&self, key: &str) -> String {
        key.chars()
            .filter(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '@' | '.'))
            .collect()
    }

    /// Escape a logfmt value (quote if contains spaces)
    fn escape_logfmt_value(&self, value: &str) -> String {
        if value.contains(' ') || value.contains('"') || value.contains('=') {
            self.quote_logfmt_value(value)
        } else {
            value.to_string()
        }
    }

    /// Quote a logfmt value
    fn quote_logfmt_value(&self, value: &str) -> String {
        format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
    }
}
