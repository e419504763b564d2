//! Integration tests for the emit macros.
//!
//! A recording logger stands in for a real backend so the tests can inspect
//! the level, message and call site each macro produces.

use std::sync::{Arc, Mutex};

use logging::{Level, Logger, LoggerHandle, Record};

#[derive(Default)]
struct Recorder {
    records: Mutex<Vec<(Level, String, u32)>>,
}

impl Logger for Recorder {
    fn module(&self) -> &str {
        "recorder"
    }

    fn log(&self, record: &Record<'_>) {
        self.records.lock().unwrap().push((
            record.level(),
            record.args().to_string(),
            record.location().line(),
        ));
    }
}

/// Verifies each macro forwards its level and formatted message.
#[test]
fn macros_forward_level_and_message() {
    let recorder = Recorder::default();
    let peer = "10.0.0.1";

    logging::critical!(recorder, "disk {} gone", 3);
    logging::error!(recorder, "peer {peer} refused");
    logging::warn!(recorder, "retry {}/{}", 1, 5);
    logging::info!(recorder, "ready");
    logging::debug!(recorder, "{:>4}", 7);

    let records = recorder.records.lock().unwrap();
    let observed: Vec<(Level, &str)> = records
        .iter()
        .map(|(level, message, _)| (*level, message.as_str()))
        .collect();
    assert_eq!(
        observed,
        [
            (Level::Critical, "disk 3 gone"),
            (Level::Error, "peer 10.0.0.1 refused"),
            (Level::Warning, "retry 1/5"),
            (Level::Info, "ready"),
            (Level::Debug, "   7"),
        ]
    );
}

/// Verifies the macros report the line they were invoked on.
#[test]
fn macros_capture_invocation_line() {
    let recorder = Recorder::default();
    let expected = line!() + 1;
    logging::info!(recorder, "located");

    let records = recorder.records.lock().unwrap();
    assert_eq!(records[0].2, expected);
}

/// Verifies the macros accept shared handles and references alike.
#[test]
fn macros_accept_handles_and_references() {
    let recorder = Arc::new(Recorder::default());
    let handle: LoggerHandle = recorder.clone();
    let borrowed: &dyn Logger = recorder.as_ref();

    logging::warn!(handle, "via handle");
    logging::warn!(borrowed, "via reference");
    logging::log!(&handle, Level::Error, "explicit level");

    assert_eq!(recorder.records.lock().unwrap().len(), 3);
}
