//! Backend implementations

pub mod discard;

#[cfg(feature = "console")]
pub mod console;

#[cfg(feature = "tracing-bridge")]
pub mod tracing_bridge;

pub use discard::{DiscardConstructor, DiscardLogger, DISCARD_NAME};

#[cfg(feature = "console")]
pub use console::{ConsoleConstructor, ConsoleLogger, STDLOG_NAME};

#[cfg(feature = "tracing-bridge")]
pub use tracing_bridge::{TracingConstructor, TracingLogger, TRACING_NAME};

use crate::core::Registry;
use std::sync::Arc;

/// Register every backend compiled into the crate
pub(crate) fn register_builtins(registry: &Registry) {
    registry.register(DISCARD_NAME, Arc::new(DiscardConstructor));

    #[cfg(feature = "console")]
    registry.register(STDLOG_NAME, Arc::new(ConsoleConstructor));

    #[cfg(feature = "tracing-bridge")]
    registry.register(TRACING_NAME, Arc::new(TracingConstructor));
}
