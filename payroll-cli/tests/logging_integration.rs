//! Installs the global subscriber. Kept in its own test binary so that no
//! other test sees an initialised logger.

use std::fs;

use payroll_cli::config::LoggingConfig;
use payroll_cli::logging;

#[test]
fn test_init_logging_without_console_writes_to_file() {
    let path = std::path::Path::new(env!("CARGO_TARGET_TMPDIR")).join("payroll-logging.log");
    let _ = fs::remove_file(&path);

    let config = LoggingConfig {
        level: Some("info".to_string()),
        file: Some(path.clone()),
        stdout: false,
    };
    logging::init_logging(&config).expect("logging should initialise with console off");

    tracing::info!("payroll run started");
    tracing::debug!("hidden at info level");

    logging::set_log_level("debug").expect("level handle should be installed");
    tracing::debug!("visible after level change");

    let written = fs::read_to_string(&path).expect("log file should exist");
    assert!(written.contains("payroll run started"));
    assert!(!written.contains("hidden at info level"));
    assert!(written.contains("visible after level change"));

    assert!(logging::set_log_level("payroll_core=loud").is_err());
}
