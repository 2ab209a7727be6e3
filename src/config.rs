//! Strtoi Configuration
//!
//! Handles parsing and management of strtoi.toml configuration files.

use crate::width::WidthKind;
use crate::{is_valid_base, AUTO_BASE};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// File name searched for by [`StrtoiConfig::find_and_load`].
pub const CONFIG_FILE: &str = "strtoi.toml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config file not found: {0}")]
    NotFound(String),

    #[error("Invalid base {0} in config: expected 0 or 2..=36")]
    InvalidBase(u32),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Root configuration structure matching strtoi.toml.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StrtoiConfig {
    /// Parsing defaults
    #[serde(default)]
    pub parse: ParseConfig,

    /// Output settings for the CLI
    #[serde(default)]
    pub output: OutputConfig,
}

impl StrtoiConfig {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let config: StrtoiConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the current directory or parents.
    pub fn load_from_cwd() -> ConfigResult<Self> {
        let cwd = std::env::current_dir().map_err(ConfigError::Io)?;
        Self::find_and_load(&cwd)
    }

    /// Find and load configuration by searching up from the given directory.
    pub fn find_and_load(start_dir: &Path) -> ConfigResult<Self> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let config_path = dir.join(CONFIG_FILE);
            if config_path.exists() {
                return Self::load(&config_path);
            }
            if !dir.pop() {
                // Reached root without finding config
                return Ok(Self::default());
            }
        }
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject settings the parser would refuse at call time.
    pub fn validate(&self) -> ConfigResult<()> {
        let base = self.parse.base;
        if base != AUTO_BASE && !is_valid_base(base) {
            return Err(ConfigError::InvalidBase(base));
        }
        Ok(())
    }
}

/// Parsing defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParseConfig {
    /// Base, 0 for auto-detection
    #[serde(default)]
    pub base: u32,

    /// Target integer kind
    #[serde(default = "default_kind")]
    pub kind: WidthKind,
}

fn default_kind() -> WidthKind {
    WidthKind::I64
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            base: AUTO_BASE,
            kind: default_kind(),
        }
    }
}

/// How results are printed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Text or JSON lines
    #[serde(default)]
    pub format: OutputFormat,

    /// Include consumed length and status in text output
    #[serde(default = "default_true")]
    pub show_status: bool,
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_status: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push("strtoi_config_tests");
        path.push(name);
        std::fs::create_dir_all(&path).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = StrtoiConfig::default();
        assert_eq!(config.parse.base, 0);
        assert_eq!(config.parse.kind, WidthKind::I64);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.show_status);
    }

    #[test]
    fn test_parse_config() {
        let toml_str = r#"
[parse]
base = 16
kind = "u32"

[output]
format = "json"
"#;
        let config: StrtoiConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.parse.base, 16);
        assert_eq!(config.parse.kind, WidthKind::U32);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.show_status);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: StrtoiConfig = toml::from_str("[parse]\nbase = 8\n").unwrap();
        assert_eq!(config.parse.kind, WidthKind::I64);
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_base() {
        let mut config = StrtoiConfig::default();
        config.parse.base = 37;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidBase(37))));
        config.parse.base = 36;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = scratch_dir("save_and_load");
        let path = dir.join(CONFIG_FILE);
        let mut config = StrtoiConfig::default();
        config.parse.kind = WidthKind::U16;
        config.output.format = OutputFormat::Json;
        config.save(&path).unwrap();

        let loaded = StrtoiConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_find_and_load_searches_parents() {
        let dir = scratch_dir("find_parent");
        let nested = dir.join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.join(CONFIG_FILE), "[parse]\nkind = \"i8\"\n").unwrap();

        let config = StrtoiConfig::find_and_load(&nested).unwrap();
        assert_eq!(config.parse.kind, WidthKind::I8);
    }

    #[test]
    fn test_missing_file() {
        let path = scratch_dir("missing").join("nope.toml");
        assert!(matches!(
            StrtoiConfig::load(&path),
            Err(ConfigError::NotFound(_))
        ));
    }
}
