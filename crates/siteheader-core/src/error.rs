//! Error types for siteheader-core
//!
//! Rendering itself never fails: malformed menu input degrades to empty
//! markup. Errors only exist around loading header configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for siteheader operations
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================
    // IO Errors
    // ===================
    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    // ===================
    // Parse Errors
    // ===================
    #[error("Failed to parse JSON in {path}: {message}")]
    JsonParse {
        path: PathBuf,
        message: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse YAML in {path}: {message}")]
    YamlParse {
        path: PathBuf,
        message: String,
        #[source]
        source: serde_yaml::Error,
    },

    // ===================
    // Config Errors
    // ===================
    #[error("Unsupported config format for {path} (expected .json, .yaml or .yml)")]
    UnsupportedFormat { path: PathBuf },

    #[error("Unknown header variant: {value} (expected desktop or mobile)")]
    UnknownVariant { value: String },
}

impl CoreError {
    /// Actionable hint for the user, when one exists
    pub fn suggestion(&self) -> Option<String> {
        match self {
            CoreError::FileNotFound { path } => {
                Some(format!("Check if file exists: ls {}", path.display()))
            }
            CoreError::FileRead { path, .. } => {
                Some(format!("Check permissions: chmod +r {}", path.display()))
            }
            CoreError::JsonParse { .. } => {
                Some("Validate JSON syntax with: jq . <file>".to_string())
            }
            CoreError::YamlParse { .. } => {
                Some("Check indentation; YAML does not allow tabs".to_string())
            }
            CoreError::UnsupportedFormat { .. } => {
                Some("Rename the file to .json or .yaml".to_string())
            }
            CoreError::UnknownVariant { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_has_suggestion() {
        let err = CoreError::FileNotFound {
            path: PathBuf::from("/tmp/header.yaml"),
        };
        assert_eq!(err.to_string(), "File not found: /tmp/header.yaml");
        assert!(err.suggestion().unwrap().contains("/tmp/header.yaml"));
    }

    #[test]
    fn test_unknown_variant_message() {
        let err = CoreError::UnknownVariant {
            value: "tablet".to_string(),
        };
        assert!(err.to_string().contains("tablet"));
        assert!(err.suggestion().is_none());
    }
}
