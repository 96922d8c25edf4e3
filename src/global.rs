//! Process-wide logger
//!
//! A single current logger backs the free functions of this module. Until an
//! application installs one, it is the console backend on standard output at
//! `TRACE`, or the discard backend when the console backend is unavailable.
//!
//! ```
//! use rust_level_logger::global;
//! use rust_level_logger::{Level, SharedBuffer, DISCARD_NAME};
//!
//! global::use_logger(DISCARD_NAME, Box::new(SharedBuffer::new()), Level::WARN).unwrap();
//! assert!(!global::has_level(Level::INFO));
//! global::warnf(format_args!("retry {} of {}", 1, 3));
//! ```

use crate::backends::DiscardLogger;
use crate::core::{Field, Level, Logger, Options, Registry, Result, Sink};
use parking_lot::Mutex;
use std::fmt;
use std::sync::{Arc, OnceLock};

static DEFAULT_REGISTRY: OnceLock<Registry> = OnceLock::new();
static CURRENT_LOGGER: OnceLock<Mutex<Arc<dyn Logger>>> = OnceLock::new();

/// Registry holding the built-in backends; applications may add their own
pub fn default_registry() -> &'static Registry {
    DEFAULT_REGISTRY.get_or_init(Registry::with_builtins)
}

fn initial_logger() -> Arc<dyn Logger> {
    #[cfg(feature = "console")]
    {
        let sink: Sink = Box::new(std::io::stdout());
        match default_registry().new_logger(crate::backends::STDLOG_NAME, sink, Level::TRACE) {
            Ok(logger) => return Arc::from(logger),
            Err(e) => eprintln!("[LOGGER WARNING] Falling back to the discard logger: {}", e),
        }
    }

    Arc::new(DiscardLogger::new(Level::ALL))
}

fn current() -> &'static Mutex<Arc<dyn Logger>> {
    CURRENT_LOGGER.get_or_init(|| Mutex::new(initial_logger()))
}

/// The current logger
///
/// The lock is held only long enough to clone the `Arc`.
pub fn logger() -> Arc<dyn Logger> {
    current().lock().clone()
}

/// Install `logger` as the current logger
pub fn set_logger(logger: Arc<dyn Logger>) {
    let previous = std::mem::replace(&mut *current().lock(), logger);
    drop(previous);
}

/// Replace the current logger with a new instance of the backend `name`
pub fn use_logger(name: &str, sink: Sink, level: Level) -> Result<()> {
    let logger = default_registry().new_logger(name, sink, level)?;
    set_logger(Arc::from(logger));
    Ok(())
}

/// [`use_logger`] with backend options
pub fn use_logger_with_options(name: &str, sink: Sink, level: Level, options: &Options) -> Result<()> {
    let logger = default_registry().new_logger_with_options(name, sink, level, options)?;
    set_logger(Arc::from(logger));
    Ok(())
}

/// [`use_logger`], panicking on failure
///
/// # Panics
///
/// Panics when `name` is not registered or the backend rejects `level`.
pub fn must_use_logger(name: &str, sink: Sink, level: Level) {
    if let Err(e) = use_logger(name, sink, level) {
        panic!("logger: {}", e);
    }
}

pub fn has_level(level: Level) -> bool {
    logger().has_level(level)
}

pub fn set_level(level: Level) {
    logger().set_level(level);
}

pub fn log(level: Level, message: &str) {
    logger().log(level, message);
}

pub fn logw(level: Level, message: &str, fields: &[Field]) {
    logger().logw(level, message, fields);
}

macro_rules! forward_shapes {
    ($($plain:ident $ln:ident $printf:ident $keyed:ident;)*) => {$(
        #[doc = concat!("[`Logger::", stringify!($plain), "`] on the current logger")]
        pub fn $plain(args: &[&dyn fmt::Display]) {
            logger().$plain(args)
        }

        #[doc = concat!("[`Logger::", stringify!($ln), "`] on the current logger")]
        pub fn $ln(args: &[&dyn fmt::Display]) {
            logger().$ln(args)
        }

        #[doc = concat!("[`Logger::", stringify!($printf), "`] on the current logger")]
        pub fn $printf(args: fmt::Arguments<'_>) {
            logger().$printf(args)
        }

        #[doc = concat!("[`Logger::", stringify!($keyed), "`] on the current logger")]
        pub fn $keyed(message: &str, fields: &[Field]) {
            logger().$keyed(message, fields)
        }
    )*};
}

macro_rules! forward_diverging_shapes {
    ($($plain:ident $ln:ident $printf:ident $keyed:ident;)*) => {$(
        #[doc = concat!("[`Logger::", stringify!($plain), "`] on the current logger")]
        pub fn $plain(args: &[&dyn fmt::Display]) -> ! {
            logger().$plain(args)
        }

        #[doc = concat!("[`Logger::", stringify!($ln), "`] on the current logger")]
        pub fn $ln(args: &[&dyn fmt::Display]) -> ! {
            logger().$ln(args)
        }

        #[doc = concat!("[`Logger::", stringify!($printf), "`] on the current logger")]
        pub fn $printf(args: fmt::Arguments<'_>) -> ! {
            logger().$printf(args)
        }

        #[doc = concat!("[`Logger::", stringify!($keyed), "`] on the current logger")]
        pub fn $keyed(message: &str, fields: &[Field]) -> ! {
            logger().$keyed(message, fields)
        }
    )*};
}

forward_shapes! {
    trace traceln tracef tracew;
    debug debugln debugf debugw;
    print println printf printw;
    info infoln infof infow;
    warn warnln warnf warnw;
    error errorln errorf errorw;
}

forward_diverging_shapes! {
    fatal fatalln fatalf fatalw;
    panic panicln panicf panicw;
}
