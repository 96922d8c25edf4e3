//! A single log line awaiting formatting

use super::field::Field;
use super::level::Level;
use chrono::{DateTime, Local};

#[derive(Debug, Clone)]
pub struct Record<'a> {
    pub level: Level,
    pub message: &'a str,
    pub timestamp: DateTime<Local>,
    pub fields: &'a [Field],
}

impl<'a> Record<'a> {
    pub fn new(level: Level, message: &'a str) -> Self {
        Self {
            level,
            message,
            timestamp: Local::now(),
            fields: &[],
        }
    }

    pub fn with_fields(mut self, fields: &'a [Field]) -> Self {
        self.fields = fields;
        self
    }

    pub fn has_fields(&self) -> bool {
        !self.fields.is_empty()
    }
}
