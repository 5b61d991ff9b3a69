//! Toolkit configuration (`flixkit.config.json`).
//!
//! Every field has a default, so the file is optional and may be partial:
//!
//! ```json
//! {
//!   "network": "testnet",
//!   "bindings": { "lang": "fcl-js", "template_dir": "./binding-templates" }
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FlixError, Result};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "flixkit.config.json";

/// Binding generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BindingsConfig {
    /// Binding language: "fcl-js".
    pub lang: String,
    /// Directory of Handlebars templates overriding the embedded set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_dir: Option<PathBuf>,
}

impl Default for BindingsConfig {
    fn default() -> Self {
        Self {
            lang: "fcl-js".into(),
            template_dir: None,
        }
    }
}

/// Top-level toolkit configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlixkitConfig {
    /// Network cadence imports are resolved against.
    pub network: String,
    pub bindings: BindingsConfig,
}

impl Default for FlixkitConfig {
    fn default() -> Self {
        Self {
            network: "testnet".into(),
            bindings: BindingsConfig::default(),
        }
    }
}

impl FlixkitConfig {
    /// Load the config from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| FlixError::ConfigNotFound {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&contents).map_err(|e| FlixError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Load the config from `path`, or fall back to defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Write the config to `path` as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| FlixError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let config = FlixkitConfig {
            network: "mainnet".into(),
            bindings: BindingsConfig {
                lang: "fcl-js".into(),
                template_dir: Some(PathBuf::from("templates/custom")),
            },
        };
        config.save(&path).unwrap();
        assert_eq!(FlixkitConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{ "network": "emulator" }"#).unwrap();
        let config = FlixkitConfig::load(&path).unwrap();
        assert_eq!(config.network, "emulator");
        assert_eq!(config.bindings, BindingsConfig::default());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config =
            FlixkitConfig::load_or_default(Path::new("/tmp/nonexistent_flixkit.config.json")).unwrap();
        assert_eq!(config, FlixkitConfig::default());
        assert_eq!(config.network, "testnet");
        assert_eq!(config.bindings.lang, "fcl-js");
    }

    #[test]
    fn test_load_missing_file() {
        let err = FlixkitConfig::load(Path::new("/tmp/nonexistent_flixkit.config.json")).unwrap_err();
        assert!(matches!(err, FlixError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_load_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "{ network: ").unwrap();
        let err = FlixkitConfig::load_or_default(&path).unwrap_err();
        assert!(matches!(err, FlixError::ConfigParse { .. }));
    }
}
