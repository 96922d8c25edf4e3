//! Criterion benchmarks for rust_level_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_level_logger::prelude::*;
use rust_level_logger::{kv, pair_fields, simple_format};
use std::io;

// ============================================================================
// Level Benchmarks
// ============================================================================

fn bench_levels(c: &mut Criterion) {
    let mut group = c.benchmark_group("levels");
    group.throughput(Throughput::Elements(1));

    group.bench_function("parse_single", |b| {
        b.iter(|| Level::parse(black_box("debug")));
    });

    group.bench_function("parse_combined", |b| {
        b.iter(|| Level::parse(black_box("PANIC | error | info | unknown")));
    });

    group.bench_function("format_all", |b| {
        b.iter(|| black_box(Level::ALL).format());
    });

    group.bench_function("cumulative", |b| {
        b.iter(|| black_box(Level::DEBUG).cumulative());
    });

    group.finish();
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn console_to_sink(level: Level) -> ConsoleLogger {
    ConsoleLogger::new(Box::new(io::sink()), level).with_colors(false)
}

fn bench_console_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("console_logging");
    group.throughput(Throughput::Elements(1));

    let logger = console_to_sink(Level::TRACE);

    group.bench_function("plain", |b| {
        b.iter(|| logger.info(&[&"Info message ", &black_box(42)]));
    });

    group.bench_function("newline", |b| {
        b.iter(|| logger.infoln(&[&"Info", &"message", &black_box(42)]));
    });

    group.bench_function("printf", |b| {
        b.iter(|| logger.infof(format_args!("Info message {}", black_box(42))));
    });

    let fields = [Field::new("user_id", 12345), Field::new("path", "/api/users")];
    group.bench_function("keyed", |b| {
        b.iter(|| logger.infow("Request processed", black_box(&fields)));
    });

    let json = console_to_sink(Level::TRACE).with_output_format(OutputFormat::Json);
    group.bench_function("keyed_json", |b| {
        b.iter(|| json.infow("Request processed", black_box(&fields)));
    });

    group.finish();
}

fn bench_filtered_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtered_logging");
    group.throughput(Throughput::Elements(1));

    let logger = console_to_sink(Level::ERROR);

    group.bench_function("debug_filtered_plain", |b| {
        b.iter(|| logger.debug(&[&"hidden ", &black_box(42)]));
    });

    group.bench_function("debug_filtered_printf", |b| {
        b.iter(|| logger.debugf(format_args!("hidden {}", black_box(42))));
    });

    let discard = DiscardLogger::new(Level::ALL);
    group.bench_function("discard_keyed", |b| {
        b.iter(|| discard.infow("dropped", &[Field::new("k", black_box(1))]));
    });

    group.finish();
}

// ============================================================================
// Field Formatting Benchmarks
// ============================================================================

fn bench_field_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_formatting");

    let items = kv!["user", "alice", "id", 42, "admin", true, "orphan"];

    group.bench_function("pair_fields", |b| {
        b.iter(|| pair_fields(black_box(&items)));
    });

    group.bench_function("simple_format", |b| {
        b.iter(|| simple_format("login", black_box(&items), '='));
    });

    group.finish();
}

#[cfg(feature = "tracing-bridge")]
fn bench_tracing_bridge(c: &mut Criterion) {
    let mut group = c.benchmark_group("tracing_bridge");
    group.throughput(Throughput::Elements(1));

    let options = Options::new().with("disableTimestamp", true);
    let logger = TracingLogger::with_options(Box::new(io::sink()), Level::INFO, &options)
        .expect("tracing bridge");

    group.bench_function("plain", |b| {
        b.iter(|| logger.info(&[&"Info message ", &black_box(42)]));
    });

    let fields = [Field::new("user_id", 12345), Field::new("path", "/api/users")];
    group.bench_function("keyed", |b| {
        b.iter(|| logger.infow("Request processed", black_box(&fields)));
    });

    group.finish();
}

#[cfg(not(feature = "tracing-bridge"))]
fn bench_tracing_bridge(_c: &mut Criterion) {}

criterion_group!(
    benches,
    bench_levels,
    bench_console_logging,
    bench_filtered_logging,
    bench_field_formatting,
    bench_tracing_bridge,
);
criterion_main!(benches);
