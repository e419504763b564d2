//! Crate-level functions over the process-wide context.
//!
//! Kept as a single test so the global provider slot is only touched
//! sequentially.

use std::collections::HashMap;
use std::sync::Arc;

use modlog::sink::CaptureProvider;
use modlog::{Level, LevelConfig, LoggingContext, ProviderState};

#[test]
fn process_wide_facade() {
    LoggingContext::global().reset();
    assert_eq!(modlog::provider_state(), ProviderState::Unset);

    // Levels
    assert_eq!(modlog::level("global.unset"), Level::Info);
    modlog::set_level("global.a", Level::Debug);
    modlog::set_level("global.b", Level::Error);
    modlog::set_level("global.a", Level::Critical);

    let snapshot: HashMap<String, Level> = modlog::all_levels()
        .into_iter()
        .filter(|(module, _)| module.starts_with("global."))
        .collect();
    assert_eq!(
        snapshot,
        HashMap::from([
            ("global.a".to_owned(), Level::Critical),
            ("global.b".to_owned(), Level::Error),
        ])
    );
    assert!(modlog::is_enabled_for("global.b", Level::Critical));
    assert!(!modlog::is_enabled_for("global.b", Level::Warning));

    // Caller info
    assert!(!modlog::is_caller_info_enabled("global.a", Level::Error));
    modlog::show_caller_info("global.a", Level::Error);
    assert!(modlog::is_caller_info_enabled("global.a", Level::Error));
    assert!(!modlog::is_caller_info_enabled("global.a", Level::Critical));
    modlog::hide_caller_info("global.a", Level::Error);
    assert!(!modlog::is_caller_info_enabled("global.a", Level::Error));

    // Configuration
    let config: LevelConfig = "global.cfg=debug".parse().expect("valid directives");
    modlog::configure(&config);
    assert_eq!(modlog::level("global.cfg"), Level::Debug);
    assert_eq!(modlog::default_level(), Level::Info);

    // Default provider, then a custom one
    let before = modlog::new("global.svc");
    assert_eq!(modlog::provider_state(), ProviderState::Default);

    let capture = CaptureProvider::new(Arc::clone(LoggingContext::global().registry()));
    modlog::initialize(Arc::new(capture.clone()));
    assert_eq!(modlog::provider_state(), ProviderState::Custom);

    let after = modlog::new("global.svc");
    modlog::warn!(before, "to stderr");
    modlog::warn!(after, "captured {}", 1);

    let captured: Vec<String> = capture
        .drain()
        .into_iter()
        .filter(|record| record.module == "global.svc")
        .map(|record| record.message)
        .collect();
    assert_eq!(captured, ["captured 1"]);

    LoggingContext::global().reset();
    assert_eq!(modlog::provider_state(), ProviderState::Unset);
}
