//! Backend that writes nothing
//!
//! The fatal methods still exit and the panic methods still unwind: dropping
//! output never drops the control-flow signal.

use crate::core::{
    process_exit, ActiveLevel, Constructor, ExitHook, Field, Level, Logger, Options, Result, Sink,
};

/// Registry name of the discard backend
pub const DISCARD_NAME: &str = "discard";

pub struct DiscardConstructor;

impl Constructor for DiscardConstructor {
    fn new_with_options(&self, _sink: Sink, level: Level, _options: &Options) -> Result<Box<dyn Logger>> {
        Ok(Box::new(DiscardLogger::new(level)))
    }
}

pub struct DiscardLogger {
    level: ActiveLevel,
    exit_hook: ExitHook,
}

impl DiscardLogger {
    pub fn new(level: Level) -> Self {
        Self {
            level: ActiveLevel::new(level),
            exit_hook: process_exit,
        }
    }

    /// Run `hook` before the process exits on a fatal call
    #[must_use]
    pub fn with_exit_hook(mut self, hook: ExitHook) -> Self {
        self.exit_hook = hook;
        self
    }
}

impl Logger for DiscardLogger {
    fn has_level(&self, level: Level) -> bool {
        self.level.has(level)
    }

    fn set_level(&self, level: Level) {
        self.level.set(level);
    }

    fn output(&self, _level: Level, _message: &str) {}

    fn output_fields(&self, _level: Level, _message: &str, _fields: &[Field]) {}

    fn exit(&self, code: i32) -> ! {
        (self.exit_hook)(code);
        std::process::exit(code)
    }
}
