use qualpoly_config::{discover_config_path, load_for_root, MissingBasePolicy, QUALPOLY_CONFIG_ENV_VAR};
use tempfile::tempdir;

use super::{EnvVarGuard, ENV_LOCK};

#[test]
fn prefers_plain_name_over_hidden_name() {
    let _lock = ENV_LOCK.lock().expect("ENV_LOCK mutex poisoned");
    let _env = EnvVarGuard::unset(QUALPOLY_CONFIG_ENV_VAR);

    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join(".qualpoly.toml"), "").unwrap();
    assert_eq!(
        discover_config_path(dir.path()),
        Some(dir.path().join(".qualpoly.toml"))
    );

    std::fs::write(dir.path().join("qualpoly.toml"), "").unwrap();
    assert_eq!(
        discover_config_path(dir.path()),
        Some(dir.path().join("qualpoly.toml"))
    );
}

#[test]
fn env_var_overrides_discovery() {
    let _lock = ENV_LOCK.lock().expect("ENV_LOCK mutex poisoned");

    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("qualpoly.toml"), "").unwrap();
    let custom = dir.path().join("custom.toml");
    std::fs::write(&custom, "[bounds]\nmissing_base = \"warn\"\n").unwrap();
    let _env = EnvVarGuard::set(QUALPOLY_CONFIG_ENV_VAR, &custom);

    let (config, path) = load_for_root(dir.path()).expect("config should load");
    assert_eq!(path, Some(custom));
    assert_eq!(config.bounds.missing_base, MissingBasePolicy::Warn);
}

#[test]
fn missing_config_falls_back_to_defaults() {
    let _lock = ENV_LOCK.lock().expect("ENV_LOCK mutex poisoned");
    let _env = EnvVarGuard::unset(QUALPOLY_CONFIG_ENV_VAR);

    let dir = tempdir().unwrap();
    let (config, path) = load_for_root(dir.path()).expect("defaults should load");
    assert_eq!(path, None);
    assert_eq!(config, Default::default());
}
