//! Errors from loading layer configuration.
//!
//! Style resolution itself has no error channel; only configuration parsing
//! and validation can fail.

use thiserror::Error;

/// Error returned when a layer or overlay configuration can't be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A setting parsed but holds an unusable value.
    #[error("layer '{layer}': {field} {reason}")]
    Validation {
        layer: String,
        field: &'static str,
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn validation(layer: &str, field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Validation {
            layer: layer.to_string(),
            field,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ConfigError::validation("roads", "lineOpacity", "must be within [0, 1], got 3");
        let msg = err.to_string();
        assert!(msg.contains("roads"));
        assert!(msg.contains("lineOpacity"));
        assert!(msg.contains("got 3"));
    }

    #[test]
    fn test_json_error_is_wrapped() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ConfigError::from(source);
        assert!(matches!(err, ConfigError::Json(_)));
        assert!(err.to_string().starts_with("invalid JSON configuration"));
    }
}
