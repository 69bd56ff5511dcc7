use crate::diagnostics::{ConfigValidationError, ConfigWarning, ValidationDiagnostics};
use crate::{LoggingConfig, QualPolyConfig};

impl QualPolyConfig {
    /// Validate semantic invariants, reporting every problem found in one pass.
    #[must_use]
    pub fn validate(&self) -> ValidationDiagnostics {
        let mut out = ValidationDiagnostics::default();

        validate_annotations(self, &mut out);
        validate_logging(self, &mut out);

        out
    }
}

fn validate_annotations(config: &QualPolyConfig, out: &mut ValidationDiagnostics) {
    let package = &config.annotations.package;
    let message = if package.trim().is_empty() {
        Some("must not be empty")
    } else if package.starts_with('.') || package.ends_with('.') || package.contains("..") {
        Some("must be a dotted package name without empty segments")
    } else if package.chars().any(char::is_whitespace) {
        Some("must not contain whitespace")
    } else {
        None
    };

    if let Some(message) = message {
        out.errors.push(ConfigValidationError::InvalidValue {
            toml_path: "annotations.package".to_owned(),
            message: message.to_owned(),
        });
    }
}

fn validate_logging(config: &QualPolyConfig, out: &mut ValidationDiagnostics) {
    let normalized = LoggingConfig::normalize_level_directives(&config.logging.level);
    if !config.logging.level.trim().is_empty()
        && tracing_subscriber::EnvFilter::try_new(normalized.clone()).is_err()
    {
        out.warnings.push(ConfigWarning::LoggingLevelInvalid {
            value: config.logging.level.clone(),
            normalized,
        });
    }
}
