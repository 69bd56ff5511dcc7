use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Once;

use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

mod diagnostics;
mod validation;

pub use diagnostics::{ConfigDiagnostics, ConfigValidationError, ConfigWarning, ValidationDiagnostics};

/// Environment variable pointing at an explicit config file.
pub const QUALPOLY_CONFIG_ENV_VAR: &str = "QUALPOLY_CONFIG";

/// Standard `tracing` directive variable merged into [`LoggingConfig::level`].
pub const RUST_LOG_ENV_VAR: &str = "RUST_LOG";

/// Package holding the tainting qualifier annotations.
pub const DEFAULT_QUAL_PACKAGE: &str =
    "org.checkerframework.checker.experimental.tainting_qual_poly.qual";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationsConfig {
    /// Fully qualified package of the qualifier annotations (`Tainted`, `Var`, `MultiTainted`, ...).
    #[serde(default = "AnnotationsConfig::default_package")]
    pub package: String,
}

impl AnnotationsConfig {
    fn default_package() -> String {
        DEFAULT_QUAL_PACKAGE.to_owned()
    }
}

impl Default for AnnotationsConfig {
    fn default() -> Self {
        Self {
            package: Self::default_package(),
        }
    }
}

/// What to do with an `@Extends`/`@Super` whose target has no base binding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingBasePolicy {
    /// Reject the annotation set with an error.
    #[default]
    Error,
    /// Skip the modifier and log a warning.
    Warn,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundsConfig {
    #[serde(default)]
    pub missing_base: MissingBasePolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Logging level, or a full `EnvFilter` directive string.
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,

    /// Emit logs in JSON format.
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    fn default_level() -> String {
        "info".to_owned()
    }

    pub(crate) fn normalize_level_directives(input: &str) -> String {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Self::default_level();
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "trace" => "trace".to_owned(),
            "debug" => "debug".to_owned(),
            "info" => "info".to_owned(),
            "warn" | "warning" => "warn".to_owned(),
            "error" => "error".to_owned(),
            _ => trimmed.to_owned(),
        }
    }

    /// Effective filter: `level` followed by the `RUST_LOG` directives, so
    /// `RUST_LOG` wins where both name the same target.
    ///
    /// Candidates are tried in order: the merged directives, `RUST_LOG` alone,
    /// `level` alone. If none parses the filter falls back to `info`.
    pub fn env_filter(&self) -> EnvFilter {
        let level = Self::normalize_level_directives(&self.level);
        let mut candidates = Vec::with_capacity(3);
        if let Some(env) = std::env::var(RUST_LOG_ENV_VAR)
            .ok()
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
        {
            candidates.push(format!("{level},{env}"));
            candidates.push(env);
        }
        candidates.push(level);

        candidates
            .into_iter()
            .find_map(|directives| EnvFilter::try_new(directives).ok())
            .unwrap_or_else(|| EnvFilter::default().add_directive(LevelFilter::INFO.into()))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
            json: false,
        }
    }
}

/// Top-level configuration (`qualpoly.toml`).
///
/// ```toml
/// [annotations]
/// package = "org.checkerframework.checker.experimental.tainting_qual_poly.qual"
///
/// [bounds]
/// missing_base = "error"
///
/// [logging]
/// level = "info"
/// json = false
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualPolyConfig {
    #[serde(default)]
    pub annotations: AnnotationsConfig,

    #[serde(default)]
    pub bounds: BoundsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse toml config: {0}")]
    Toml(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        // The default `Display` embeds a source snippet; keep only the message.
        ConfigError::Toml(err.message().to_owned())
    }
}

impl QualPolyConfig {
    /// Load a config file from TOML.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = read_config(path.as_ref())?;
        Ok(toml::from_str(&text)?)
    }

    /// Load a config file from TOML and report unknown keys and validation problems.
    pub fn load_from_path_with_diagnostics(
        path: impl AsRef<Path>,
    ) -> Result<(Self, ConfigDiagnostics), ConfigError> {
        let text = read_config(path.as_ref())?;
        Self::load_from_str_with_diagnostics(&text)
    }

    pub fn load_from_str_with_diagnostics(
        text: &str,
    ) -> Result<(Self, ConfigDiagnostics), ConfigError> {
        let (config, unknown_keys) =
            diagnostics::deserialize_toml_with_unknown_keys::<QualPolyConfig>(text)?;

        let mut diagnostics = ConfigDiagnostics {
            unknown_keys,
            ..ConfigDiagnostics::default()
        };
        diagnostics.extend_validation(config.validate());

        Ok((config, diagnostics))
    }
}

fn read_config(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Locate the config file for a project root.
///
/// Resolution order:
/// 1) `QUALPOLY_CONFIG` (absolute or relative to `root`)
/// 2) `qualpoly.toml` in `root`
/// 3) `.qualpoly.toml` in `root`
pub fn discover_config_path(root: &Path) -> Option<PathBuf> {
    if let Some(value) = std::env::var_os(QUALPOLY_CONFIG_ENV_VAR) {
        let candidate = PathBuf::from(value);
        let path = if candidate.is_absolute() {
            candidate
        } else {
            root.join(candidate)
        };
        return Some(path);
    }

    ["qualpoly.toml", ".qualpoly.toml"]
        .into_iter()
        .map(|name| root.join(name))
        .find(|path| path.is_file())
}

/// Load the configuration for a project root.
///
/// If no config is present, returns [`QualPolyConfig::default`] and `None`.
pub fn load_for_root(root: &Path) -> Result<(QualPolyConfig, Option<PathBuf>), ConfigError> {
    let Some(path) = discover_config_path(root) else {
        return Ok((QualPolyConfig::default(), None));
    };

    let config = QualPolyConfig::load_from_path(&path)?;
    Ok((config, Some(path)))
}

static TRACING_INIT: Once = Once::new();

/// Installs a global `tracing` subscriber writing to stderr, plain text or
/// JSON lines depending on [`LoggingConfig::json`].
///
/// Returns whether this call installed the subscriber. Only the first call
/// tries; a subscriber installed earlier by a host application is left in
/// place and `false` is returned.
pub fn init_tracing(config: &LoggingConfig) -> bool {
    let mut installed = false;
    TRACING_INIT.call_once(|| {
        let filter = config.env_filter();
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr);
        let result = if config.json {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
        installed = result.is_ok();
        tracing::debug!(
            target: "qualpoly.config",
            json = config.json,
            level = %config.level,
            installed,
            "tracing initialized"
        );
    });
    installed
}
