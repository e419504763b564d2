//! Integration tests for the line-oriented default provider.

use std::sync::Arc;
use std::thread;

use logging::{Level, LevelRegistry, LoggerProvider};
use logging_sink::{DefaultProvider, LineFormat, Output, SharedBuffer};

#[test]
fn concurrent_loggers_never_interleave_lines() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("concurrent.log");
    let registry = Arc::new(LevelRegistry::new());
    let provider = DefaultProvider::new(Arc::clone(&registry))
        .with_output(Output::file(&path).expect("open log file"))
        .with_format(LineFormat::new().without_timestamps());

    thread::scope(|scope| {
        for worker in 0..8 {
            let logger = provider.logger(&format!("worker{worker}"));
            scope.spawn(move || {
                for seq in 0..200 {
                    logging::info!(logger, "seq={seq} payload={}", "x".repeat(64));
                }
            });
        }
    });

    let written = std::fs::read_to_string(&path).expect("read log file");
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 8 * 200);
    for line in lines {
        assert!(line.starts_with("[worker"), "malformed line: {line}");
        assert!(line.contains("] INFO seq="), "malformed line: {line}");
        assert!(line.ends_with(&"x".repeat(64)), "truncated line: {line}");
    }
}

#[test]
fn per_module_levels_and_caller_info() {
    let registry = Arc::new(LevelRegistry::new());
    let buffer = SharedBuffer::new();
    let provider = DefaultProvider::new(Arc::clone(&registry))
        .with_output(Output::Buffer(buffer.clone()))
        .with_format(LineFormat::new().without_timestamps());

    let db = provider.logger("db");
    let http = provider.logger("http");
    registry.set_level("db", Level::Debug);
    registry.set_level("http", Level::Error);
    registry.show_caller_info("db", Level::Debug);

    logging::debug!(db, "query took {}ms", 3);
    let db_line = line!() - 1;
    logging::warn!(http, "slow client");
    logging::error!(http, "reset by peer");

    assert_eq!(
        buffer.lines(),
        [
            format!("[db] DEBUG [{}:{db_line}] query took 3ms", file!()),
            "[http] ERROR reset by peer".to_owned(),
        ]
    );
}

#[test]
fn timestamps_prefix_every_line_by_default() {
    let registry = Arc::new(LevelRegistry::new());
    let buffer = SharedBuffer::new();
    let provider =
        DefaultProvider::new(registry).with_output(Output::Buffer(buffer.clone()));

    logging::warn!(provider.logger("clock"), "tick");

    let lines = buffer.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with(" UTC [clock] WARNING tick"), "{}", lines[0]);
}
