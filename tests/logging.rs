// No `mod common` here: `init_logging` installs the global subscriber itself.

use rex::logging::{init_logging, resolve_level, LogLevel, LOG_ENV_VAR};

#[test]
fn test_log_level_parses_case_insensitively() {
    assert_eq!("debug".parse::<LogLevel>(), Ok(LogLevel::Debug));
    assert_eq!(" TRACE ".parse::<LogLevel>(), Ok(LogLevel::Trace));
    assert_eq!("Warning".parse::<LogLevel>(), Ok(LogLevel::Warn));
    assert_eq!("warn".parse::<LogLevel>(), Ok(LogLevel::Warn));
    assert_eq!("error".parse::<LogLevel>(), Ok(LogLevel::Error));
}

#[test]
fn test_invalid_log_level_is_reported() {
    let err = "loud".parse::<LogLevel>().expect_err("loud is not a level");

    assert!(err.contains("invalid log level: loud"));
}

#[test]
fn test_level_priority() {
    assert_eq!(
        resolve_level(Some(LogLevel::Error), Some("trace")),
        LogLevel::Error
    );
    assert_eq!(resolve_level(None, Some("trace")), LogLevel::Trace);
    assert_eq!(resolve_level(None, Some("nonsense")), LogLevel::Info);
    assert_eq!(resolve_level(None, None), LogLevel::Info);
}

#[test]
fn test_level_maps_to_tracing_level() {
    assert_eq!(tracing::Level::from(LogLevel::Warn), tracing::Level::WARN);
    assert_eq!(LogLevel::default(), LogLevel::Info);
    assert_eq!(tracing::Level::from(LogLevel::default()), tracing::Level::INFO);
}

#[test]
fn test_env_var_name() {
    assert_eq!(LOG_ENV_VAR, "REX_LOG");
}

#[test]
fn test_init_logging_installs_once() {
    init_logging(Some(LogLevel::Debug)).expect("first install succeeds");

    let err = init_logging(None).expect_err("second install fails");
    assert!(err.to_string().contains("failed to install tracing subscriber"));
}
