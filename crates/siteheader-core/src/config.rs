//! Header configuration files (JSON or YAML)

use crate::error::CoreError;
use crate::layout::Variant;
use crate::models::HeaderProps;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Props plus the variant to render them with
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderConfig {
    #[serde(default)]
    pub variant: Variant,
    #[serde(flatten)]
    pub props: HeaderProps,
}

/// File formats accepted by `HeaderConfig::load`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(ConfigFormat::Json),
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            _ => None,
        }
    }
}

impl HeaderConfig {
    /// Load a config file, picking the parser from the extension
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let format = ConfigFormat::from_path(path).ok_or_else(|| CoreError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;

        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CoreError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                CoreError::FileRead {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        let config = Self::parse(&content, format, path)?;
        debug!(
            path = %path.display(),
            variant = %config.variant,
            menu_entries = config.props.main_menu.len(),
            "Loaded header config"
        );
        Ok(config)
    }

    /// Load a config file, falling back to defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(CoreError::FileNotFound { .. }) => {
                debug!(path = %path.display(), "Header config not found, using defaults");
                Self::default()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to load header config, using defaults");
                Self::default()
            }
        }
    }

    pub fn parse(content: &str, format: ConfigFormat, path: &Path) -> Result<Self, CoreError> {
        match format {
            ConfigFormat::Json => serde_json::from_str(content).map_err(|e| CoreError::JsonParse {
                path: path.to_path_buf(),
                message: e.to_string(),
                source: e,
            }),
            ConfigFormat::Yaml => serde_yaml::from_str(content).map_err(|e| CoreError::YamlParse {
                path: path.to_path_buf(),
                message: e.to_string(),
                source: e,
            }),
        }
    }
}
