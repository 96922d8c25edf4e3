//! Logging macros for ergonomic log message formatting.
//!
//! The severity macros wrap the printf shape of [`crate::Logger`] so call
//! sites read like `println!`; [`kv!`] and [`fields!`] build key/value
//! sequences for the keyed shape.
//!
//! # Examples
//!
//! ```
//! use rust_level_logger::prelude::*;
//! use rust_level_logger::{fields, infof};
//!
//! let buffer = SharedBuffer::new();
//! let logger = Registry::with_builtins()
//!     .new_logger(DISCARD_NAME, Box::new(buffer), Level::INFO)
//!     .unwrap();
//!
//! let port = 8080;
//! infof!(logger, "Server listening on port {}", port);
//! logger.infow("request", &fields!["path", "/health", "status", 200]);
//! ```

/// Build a flat key/value sequence of [`crate::FieldValue`]s.
///
/// ```
/// use rust_level_logger::{kv, simple_format};
///
/// assert_eq!(simple_format("msg", &kv!["a", 1], '='), "msg a=1");
/// ```
#[macro_export]
macro_rules! kv {
    () => {{
        let empty: [$crate::FieldValue; 0] = [];
        empty
    }};
    ($($item:expr),+ $(,)?) => {
        [$($crate::FieldValue::from($item)),+]
    };
}

/// Build typed fields from alternating keys and values.
///
/// Follows the pairing rules of [`crate::pair_fields`]: a trailing lone value
/// gets a synthesized name.
#[macro_export]
macro_rules! fields {
    ($($item:expr),* $(,)?) => {
        $crate::pair_fields(&$crate::kv![$($item),*])
    };
}

/// Log a trace-level message.
///
/// # Examples
///
/// ```
/// # use rust_level_logger::prelude::*;
/// # let logger = DiscardLogger::new(Level::TRACE);
/// use rust_level_logger::tracef;
/// tracef!(logger, "Entering function: calculate()");
/// tracef!(logger, "Variable value: {}", 42);
/// ```
#[macro_export]
macro_rules! tracef {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        $logger.tracef(::std::format_args!($($arg)+))
    }};
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        $logger.debugf(::std::format_args!($($arg)+))
    }};
}

/// Log an info-level message through the print alias.
#[macro_export]
macro_rules! printf {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        $logger.printf(::std::format_args!($($arg)+))
    }};
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use rust_level_logger::prelude::*;
/// # let logger = DiscardLogger::new(Level::INFO);
/// use rust_level_logger::infof;
/// infof!(logger, "Application started");
/// infof!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        $logger.infof(::std::format_args!($($arg)+))
    }};
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warnf {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        $logger.warnf(::std::format_args!($($arg)+))
    }};
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use rust_level_logger::prelude::*;
/// # let logger = DiscardLogger::new(Level::ERROR);
/// use rust_level_logger::errorf;
/// errorf!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        $logger.errorf(::std::format_args!($($arg)+))
    }};
}

/// Log a fatal-level message, then exit with status 1.
#[macro_export]
macro_rules! fatalf {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        $logger.fatalf(::std::format_args!($($arg)+))
    }};
}

/// Log a panic-level message, then unwind with a [`crate::LogPanic`].
#[macro_export]
macro_rules! panicf {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        $logger.panicf(::std::format_args!($($arg)+))
    }};
}
