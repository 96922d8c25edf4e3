//! The logger capability contract
//!
//! Every backend implements four required methods of [`Logger`]; the
//! severity methods are provided on top of them in four call shapes:
//!
//! | shape   | example                                 | message                          |
//! |---------|-----------------------------------------|----------------------------------|
//! | plain   | `logger.info(&[&"port ", &8080])`       | operands concatenated            |
//! | newline | `logger.infoln(&[&"port", &8080])`      | operands space-joined, then `\n` |
//! | printf  | `logger.infof(format_args!("{}", x))`   | formatted arguments              |
//! | keyed   | `logger.infow("msg", &fields)`          | message plus structured fields   |
//!
//! The plain shape never adds separators. Go's `fmt.Sprint` puts a space
//! between two adjacent non-string operands; here `info(&[&1, &2])` logs `12`.
//!
//! The fatal methods emit (when active) and then exit the process with status
//! 1. The panic methods emit (when active) and then unwind with a [`LogPanic`]
//! payload, which callers may recover with [`std::panic::catch_unwind`].

use super::field::{format_fields, Field};
use super::level::Level;
use std::fmt::{self, Write as _};
use std::sync::atomic::{AtomicU32, Ordering};

/// Hook invoked by the fatal path before the process exits
pub type ExitHook = fn(i32);

/// Exit status of the fatal path
pub const FATAL_EXIT_CODE: i32 = 1;

/// Payload of an unwind raised by the panic severity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogPanic {
    pub message: String,
}

impl LogPanic {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Unwind the current thread with this payload
    pub fn raise(self) -> ! {
        std::panic::panic_any(self)
    }
}

impl fmt::Display for LogPanic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Active severity set shared by backends.
///
/// Stores the cumulative expansion of the configured level so checks are a
/// single atomic load.
#[derive(Debug)]
pub struct ActiveLevel {
    bits: AtomicU32,
}

impl ActiveLevel {
    pub fn new(level: Level) -> Self {
        Self {
            bits: AtomicU32::new(level.cumulative().bits()),
        }
    }

    #[inline]
    pub fn get(&self) -> Level {
        Level::from_bits(self.bits.load(Ordering::Relaxed))
    }

    #[inline]
    pub fn has(&self, level: Level) -> bool {
        self.get().has(level)
    }

    pub fn set(&self, level: Level) {
        self.bits.store(level.cumulative().bits(), Ordering::Relaxed);
    }
}

/// Concatenate operands
///
/// No separator is ever inserted, not even between two numbers: operands are
/// only known as [`fmt::Display`], so `sprint(&[&1, &2])` is `"12"`. Callers
/// that want spacing pass it in a string operand or use [`sprintln`].
pub fn sprint(args: &[&dyn fmt::Display]) -> String {
    let mut out = String::new();
    for arg in args {
        let _ = write!(out, "{}", arg);
    }
    out
}

/// Space-join operands and terminate with a newline
pub fn sprintln(args: &[&dyn fmt::Display]) -> String {
    let mut out = String::new();
    for (idx, arg) in args.iter().enumerate() {
        if idx > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{}", arg);
    }
    out.push('\n');
    out
}

fn sprintf(args: fmt::Arguments<'_>) -> String {
    match args.as_str() {
        Some(s) => s.to_string(),
        None => fmt::format(args),
    }
}

pub trait Logger: Send + Sync {
    fn has_level(&self, level: Level) -> bool;

    /// Replace the active set with the cumulative expansion of `level`
    fn set_level(&self, level: Level);

    /// Write one line for `level`; callers have already checked the level
    fn output(&self, level: Level, message: &str);

    /// Write one line with structured fields; callers have already checked the level
    fn output_fields(&self, level: Level, message: &str, fields: &[Field]);

    /// Terminate the process after a fatal call
    fn exit(&self, code: i32) -> ! {
        std::process::exit(code)
    }

    fn log(&self, level: Level, message: &str) {
        if self.has_level(level) {
            self.output(level, message);
        }
    }

    fn logw(&self, level: Level, message: &str, fields: &[Field]) {
        if self.has_level(level) {
            self.output_fields(level, message, fields);
        }
    }

    // plain

    fn trace(&self, args: &[&dyn fmt::Display]) {
        if self.has_level(Level::TRACE) {
            self.output(Level::TRACE, &sprint(args));
        }
    }
    fn debug(&self, args: &[&dyn fmt::Display]) {
        if self.has_level(Level::DEBUG) {
            self.output(Level::DEBUG, &sprint(args));
        }
    }
    fn print(&self, args: &[&dyn fmt::Display]) {
        self.info(args);
    }
    fn info(&self, args: &[&dyn fmt::Display]) {
        if self.has_level(Level::INFO) {
            self.output(Level::INFO, &sprint(args));
        }
    }
    fn warn(&self, args: &[&dyn fmt::Display]) {
        if self.has_level(Level::WARN) {
            self.output(Level::WARN, &sprint(args));
        }
    }
    fn error(&self, args: &[&dyn fmt::Display]) {
        if self.has_level(Level::ERROR) {
            self.output(Level::ERROR, &sprint(args));
        }
    }
    fn fatal(&self, args: &[&dyn fmt::Display]) -> ! {
        if self.has_level(Level::FATAL) {
            self.output(Level::FATAL, &sprint(args));
        }
        self.exit(FATAL_EXIT_CODE)
    }
    fn panic(&self, args: &[&dyn fmt::Display]) -> ! {
        let message = sprint(args);
        if self.has_level(Level::PANIC) {
            self.output(Level::PANIC, &message);
        }
        LogPanic::new(message).raise()
    }

    // newline terminated

    fn traceln(&self, args: &[&dyn fmt::Display]) {
        if self.has_level(Level::TRACE) {
            self.output(Level::TRACE, &sprintln(args));
        }
    }
    fn debugln(&self, args: &[&dyn fmt::Display]) {
        if self.has_level(Level::DEBUG) {
            self.output(Level::DEBUG, &sprintln(args));
        }
    }
    fn println(&self, args: &[&dyn fmt::Display]) {
        self.infoln(args);
    }
    fn infoln(&self, args: &[&dyn fmt::Display]) {
        if self.has_level(Level::INFO) {
            self.output(Level::INFO, &sprintln(args));
        }
    }
    fn warnln(&self, args: &[&dyn fmt::Display]) {
        if self.has_level(Level::WARN) {
            self.output(Level::WARN, &sprintln(args));
        }
    }
    fn errorln(&self, args: &[&dyn fmt::Display]) {
        if self.has_level(Level::ERROR) {
            self.output(Level::ERROR, &sprintln(args));
        }
    }
    fn fatalln(&self, args: &[&dyn fmt::Display]) -> ! {
        if self.has_level(Level::FATAL) {
            self.output(Level::FATAL, &sprintln(args));
        }
        self.exit(FATAL_EXIT_CODE)
    }
    fn panicln(&self, args: &[&dyn fmt::Display]) -> ! {
        let message = sprintln(args);
        if self.has_level(Level::PANIC) {
            self.output(Level::PANIC, &message);
        }
        LogPanic::new(message).raise()
    }

    // printf style

    fn tracef(&self, args: fmt::Arguments<'_>) {
        if self.has_level(Level::TRACE) {
            self.output(Level::TRACE, &sprintf(args));
        }
    }
    fn debugf(&self, args: fmt::Arguments<'_>) {
        if self.has_level(Level::DEBUG) {
            self.output(Level::DEBUG, &sprintf(args));
        }
    }
    fn printf(&self, args: fmt::Arguments<'_>) {
        self.infof(args);
    }
    fn infof(&self, args: fmt::Arguments<'_>) {
        if self.has_level(Level::INFO) {
            self.output(Level::INFO, &sprintf(args));
        }
    }
    fn warnf(&self, args: fmt::Arguments<'_>) {
        if self.has_level(Level::WARN) {
            self.output(Level::WARN, &sprintf(args));
        }
    }
    fn errorf(&self, args: fmt::Arguments<'_>) {
        if self.has_level(Level::ERROR) {
            self.output(Level::ERROR, &sprintf(args));
        }
    }
    fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        if self.has_level(Level::FATAL) {
            self.output(Level::FATAL, &sprintf(args));
        }
        self.exit(FATAL_EXIT_CODE)
    }
    fn panicf(&self, args: fmt::Arguments<'_>) -> ! {
        let message = sprintf(args);
        if self.has_level(Level::PANIC) {
            self.output(Level::PANIC, &message);
        }
        LogPanic::new(message).raise()
    }

    // keyed fields

    fn tracew(&self, msg: &str, fields: &[Field]) {
        self.logw(Level::TRACE, msg, fields);
    }
    fn debugw(&self, msg: &str, fields: &[Field]) {
        self.logw(Level::DEBUG, msg, fields);
    }
    fn printw(&self, msg: &str, fields: &[Field]) {
        self.infow(msg, fields);
    }
    fn infow(&self, msg: &str, fields: &[Field]) {
        self.logw(Level::INFO, msg, fields);
    }
    fn warnw(&self, msg: &str, fields: &[Field]) {
        self.logw(Level::WARN, msg, fields);
    }
    fn errorw(&self, msg: &str, fields: &[Field]) {
        self.logw(Level::ERROR, msg, fields);
    }
    fn fatalw(&self, msg: &str, fields: &[Field]) -> ! {
        self.logw(Level::FATAL, msg, fields);
        self.exit(FATAL_EXIT_CODE)
    }
    fn panicw(&self, msg: &str, fields: &[Field]) -> ! {
        self.logw(Level::PANIC, msg, fields);
        LogPanic::new(format_fields(msg, fields, '=')).raise()
    }
}

/// Default [`ExitHook`]: terminate the process
pub fn process_exit(code: i32) {
    std::process::exit(code)
}
