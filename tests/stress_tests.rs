//! Stress tests for concurrent logging
//!
//! These tests verify:
//! - Lines from concurrent writers never interleave
//! - No line is lost under contention
//! - Level changes while writing stay consistent

#![cfg(feature = "console")]

use rust_level_logger::prelude::*;
use std::collections::HashSet;
use std::fs;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

const THREADS: usize = 8;
const LINES_PER_THREAD: usize = 500;

fn plain_console(sink: Sink, level: Level) -> Arc<dyn Logger> {
    Arc::new(
        ConsoleLogger::new(sink, level)
            .with_colors(false)
            .with_timestamp_format(TimestampFormat::Unix),
    )
}

#[test]
fn test_concurrent_writers_keep_lines_intact() {
    let buffer = SharedBuffer::new();
    let logger = plain_console(Box::new(buffer.clone()), Level::INFO);

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..LINES_PER_THREAD {
                    logger.infow("tick", &[Field::new("thread", t), Field::new("seq", i)]);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("writer thread panicked");
    }

    let lines = buffer.lines();
    assert_eq!(lines.len(), THREADS * LINES_PER_THREAD);

    let mut seen = HashSet::new();
    for line in &lines {
        assert!(line.starts_with("INFOO ["), "corrupted line: {:?}", line);
        let (_, fields) = line.split_once("] tick\t").expect("missing message");
        assert!(seen.insert(fields.to_string()), "duplicate line: {:?}", line);
    }
}

#[test]
fn test_concurrent_file_writers() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("stress.log");
    let file = fs::File::create(&log_file).expect("Failed to create log file");
    let logger = plain_console(Box::new(file), Level::TRACE);

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..LINES_PER_THREAD {
                    logger.debugf(format_args!("thread {} line {}", t, i));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("writer thread panicked");
    }
    drop(logger);

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), THREADS * LINES_PER_THREAD);
    assert!(lines.iter().all(|l| l.starts_with("DEBUG [") && l.contains("] thread ")));
}

#[test]
fn test_level_changes_under_load() {
    let buffer = SharedBuffer::new();
    let logger = plain_console(Box::new(buffer.clone()), Level::ERROR);

    let writer = {
        let logger = Arc::clone(&logger);
        thread::spawn(move || {
            for i in 0..2_000 {
                logger.error(&[&"error ", &i]);
                logger.debug(&[&"debug ", &i]);
            }
        })
    };

    let toggler = {
        let logger = Arc::clone(&logger);
        thread::spawn(move || {
            for i in 0..2_000 {
                logger.set_level(if i % 2 == 0 { Level::DEBUG } else { Level::ERROR });
            }
        })
    };

    writer.join().expect("writer thread panicked");
    toggler.join().expect("toggler thread panicked");

    let lines = buffer.lines();
    let errors = lines.iter().filter(|l| l.starts_with("ERROR [")).count();
    assert_eq!(errors, 2_000);
    assert!(lines.iter().all(|l| l.starts_with("ERROR [") || l.starts_with("DEBUG [")));
}
