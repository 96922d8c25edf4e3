//! Named logger backends
//!
//! A [`Registry`] maps backend names to [`Constructor`]s. Applications own one
//! (usually built with [`Registry::with_builtins`]) and create loggers through
//! it by name; [`crate::global::default_registry`] offers a process-wide one.
//!
//! ```
//! use rust_level_logger::prelude::*;
//!
//! let registry = Registry::with_builtins();
//! let buffer = SharedBuffer::new();
//!
//! let logger = registry
//!     .new_logger(STDLOG_NAME, Box::new(buffer.clone()), Level::INFO)
//!     .unwrap();
//! logger.info(&[&"ready"]);
//! assert!(buffer.contents().contains("ready"));
//!
//! assert!(registry.new_logger("syslog", Box::new(buffer), Level::INFO).is_err());
//! ```

use super::error::{LoggerError, Result};
use super::level::Level;
use super::logger::Logger;
use super::options::Options;
use parking_lot::{Mutex, RwLock};
use std::collections::BTreeMap;
use std::io;
use std::sync::Arc;

/// Destination of a backend's output
pub type Sink = Box<dyn io::Write + Send>;

/// Factory for one kind of backend
pub trait Constructor: Send + Sync {
    fn new(&self, sink: Sink, level: Level) -> Result<Box<dyn Logger>> {
        self.new_with_options(sink, level, &Options::new())
    }

    fn new_with_options(&self, sink: Sink, level: Level, options: &Options)
        -> Result<Box<dyn Logger>>;
}

/// Closures are constructors that take options
impl<F> Constructor for F
where
    F: Fn(Sink, Level, &Options) -> Result<Box<dyn Logger>> + Send + Sync,
{
    fn new_with_options(
        &self,
        sink: Sink,
        level: Level,
        options: &Options,
    ) -> Result<Box<dyn Logger>> {
        self(sink, level, options)
    }
}

#[derive(Default)]
pub struct Registry {
    constructors: RwLock<BTreeMap<String, Arc<dyn Constructor>>>,
}

impl Registry {
    /// An empty registry
    pub fn new() -> Self {
        Self {
            constructors: RwLock::new(BTreeMap::new()),
        }
    }

    /// A registry holding every backend compiled into the crate
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        crate::backends::register_builtins(&registry);
        registry
    }

    /// Register a constructor under `name`.
    ///
    /// # Panics
    ///
    /// Registering the same name twice is a wiring bug and panics.
    pub fn register(&self, name: impl Into<String>, constructor: Arc<dyn Constructor>) {
        let name = name.into();
        let mut constructors = self.constructors.write();
        if constructors.contains_key(&name) {
            panic!("logger: Register called twice for Constructor {}", name);
        }
        constructors.insert(name, constructor);
    }

    pub fn lookup(&self, name: &str) -> Option<Arc<dyn Constructor>> {
        self.constructors.read().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.constructors.read().contains_key(name)
    }

    /// Registered names in sorted order
    pub fn names(&self) -> Vec<String> {
        self.constructors.read().keys().cloned().collect()
    }

    pub fn new_logger(&self, name: &str, sink: Sink, level: Level) -> Result<Box<dyn Logger>> {
        let constructor = self
            .lookup(name)
            .ok_or_else(|| LoggerError::unknown_backend(name))?;
        constructor.new(sink, level)
    }

    pub fn new_logger_with_options(
        &self,
        name: &str,
        sink: Sink,
        level: Level,
        options: &Options,
    ) -> Result<Box<dyn Logger>> {
        let constructor = self
            .lookup(name)
            .ok_or_else(|| LoggerError::unknown_backend(name))?;
        constructor.new_with_options(sink, level, options)
    }
}

/// Cloneable in-memory sink; every clone appends to the same buffer
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.inner.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
