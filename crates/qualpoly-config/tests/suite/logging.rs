use pretty_assertions::assert_eq;
use qualpoly_config::{init_tracing, LoggingConfig, RUST_LOG_ENV_VAR};
use tracing_subscriber::filter::LevelFilter;

use super::{EnvVarGuard, ENV_LOCK};

fn logging(level: &str) -> LoggingConfig {
    LoggingConfig {
        level: level.to_owned(),
        ..LoggingConfig::default()
    }
}

#[test]
fn level_alone_sets_the_filter() {
    let _lock = ENV_LOCK.lock().expect("ENV_LOCK mutex poisoned");
    let _env = EnvVarGuard::unset(RUST_LOG_ENV_VAR);

    assert_eq!(logging("debug").env_filter().max_level_hint(), Some(LevelFilter::DEBUG));
    assert_eq!(logging("WARNING").env_filter().max_level_hint(), Some(LevelFilter::WARN));
    assert_eq!(logging("  ").env_filter().max_level_hint(), Some(LevelFilter::INFO));
}

#[test]
fn rust_log_is_merged_with_the_level() {
    let _lock = ENV_LOCK.lock().expect("ENV_LOCK mutex poisoned");
    let _env = EnvVarGuard::set(RUST_LOG_ENV_VAR, "qualpoly.tainting=trace");

    assert_eq!(logging("warn").env_filter().max_level_hint(), Some(LevelFilter::TRACE));
}

#[test]
fn unparseable_rust_log_falls_back_to_the_level() {
    let _lock = ENV_LOCK.lock().expect("ENV_LOCK mutex poisoned");
    let _env = EnvVarGuard::set(RUST_LOG_ENV_VAR, "qualpoly=loud");

    assert_eq!(logging("debug").env_filter().max_level_hint(), Some(LevelFilter::DEBUG));
}

#[test]
fn unparseable_level_falls_back_to_info() {
    let _lock = ENV_LOCK.lock().expect("ENV_LOCK mutex poisoned");
    let _env = EnvVarGuard::unset(RUST_LOG_ENV_VAR);

    assert_eq!(logging("qualpoly=loud").env_filter().max_level_hint(), Some(LevelFilter::INFO));
}

#[test]
fn tracing_is_installed_once() {
    let _lock = ENV_LOCK.lock().expect("ENV_LOCK mutex poisoned");
    let _env = EnvVarGuard::unset(RUST_LOG_ENV_VAR);

    let config = LoggingConfig {
        json: true,
        ..logging("qualpoly.config=debug")
    };
    assert!(init_tracing(&config));
    assert!(!init_tracing(&config));
    tracing::info!(target: "qualpoly.config", "logged through the installed subscriber");
}
