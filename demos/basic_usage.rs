//! Basic logger usage example
//!
//! Demonstrates choosing backends by name, combinable levels, the four call
//! shapes and the process-wide logger.
//!
//! Run with: cargo run --example basic_usage

use rust_level_logger::prelude::*;
use rust_level_logger::{fields, global, infof};
use std::io;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Rust Level Logger - Basic Usage Example ===\n");

    let registry = Registry::with_builtins();
    println!("Registered backends: {:?}\n", registry.names());

    // Console backend at TRACE
    let logger = registry.new_logger(STDLOG_NAME, Box::new(io::stdout()), Level::TRACE)?;

    println!("1. Logging at different levels:");
    logger.trace(&[&"This is a trace message"]);
    logger.debug(&[&"This is a debug message"]);
    logger.info(&[&"This is an info message"]);
    logger.warn(&[&"This is a warning message"]);
    logger.error(&[&"This is an error message"]);

    println!("\n2. Call shapes:");
    logger.info(&[&"listening on port ", &8080]);
    logger.infoln(&[&"space", &"joined", &"operands"]);
    infof!(logger, "formatted: {} items in {:.1}s", 100, 2.5);
    logger.infow("request", &fields!["path", "/health", "status", 200]);
    logger
        .entry(Level::WARN)
        .message("slow query")
        .field("table", "users")
        .field("ms", 1250)
        .log();

    println!("\n3. Changing the threshold:");
    logger.set_level(Level::parse("warn")?);
    println!("   Level set to {} - trace, debug and info won't show:", Level::WARN.cumulative());
    logger.debug(&[&"Debug message (hidden)"]);
    logger.info(&[&"Info message (hidden)"]);
    logger.warn(&[&"Warning message (visible)"]);

    println!("\n4. JSON output:");
    let options = Options::new().with("formatter", "json");
    let json = registry.new_logger_with_options(STDLOG_NAME, Box::new(io::stdout()), Level::INFO, &options)?;
    json.errorw("db unavailable", &[Field::new("retries", 3), Field::new("fatal", false)]);

    println!("\n5. Bridged to tracing:");
    let options = Options::new().with("showTarget", true);
    let bridged = registry.new_logger_with_options(TRACING_NAME, Box::new(io::stdout()), Level::DEBUG, &options)?;
    bridged.debugw("cache miss", &[Field::new("key", "user:42")]);

    println!("\n6. Recovering from a panic-level call:");
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        logger.panic(&[&"unrecoverable state"]);
    }));
    if let Err(payload) = result {
        if let Some(panic) = payload.downcast_ref::<LogPanic>() {
            println!("   recovered: {}", panic);
        }
    }

    println!("\n7. Process-wide logger:");
    global::set_logger(Arc::from(logger));
    global::warnf(format_args!("forwarded through {}", "the global logger"));

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
