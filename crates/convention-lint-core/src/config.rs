//! Configuration types for convention-lint.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::types::Severity;

/// Top-level configuration for convention-lint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Preset to use (e.g., "recommended", "strict", "minimal").
    #[serde(default)]
    pub preset: Option<String>,

    /// Severity threshold for a failing exit status (default: "error").
    #[serde(default)]
    pub fail_on: Option<Severity>,

    /// Evaluation engine configuration.
    #[serde(default)]
    pub engine: EngineConfig,

    /// Per-rule configurations, keyed by rule id.
    #[serde(default)]
    pub rules: BTreeMap<String, RuleConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Gets the options table of a rule, if configured.
    #[must_use]
    pub fn rule_config(&self, rule_id: &str) -> Option<&RuleConfig> {
        self.rules.get(rule_id)
    }

    /// Severity threshold for a failing run.
    #[must_use]
    pub fn fail_on(&self) -> Severity {
        self.fail_on.unwrap_or(Severity::Error)
    }
}

/// Evaluation engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Number of worker threads (default: one per core).
    #[serde(default)]
    pub parallelism: Option<usize>,

    /// Number of facts per evaluation batch.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Glob patterns; facts located in matching files are skipped.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            parallelism: None,
            batch_size: default_batch_size(),
            exclude: vec!["vendor/**".to_string()],
        }
    }
}

fn default_batch_size() -> usize {
    256
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override for this rule.
    #[serde(default)]
    pub severity: Option<Severity>,

    /// Rule-specific options as key-value pairs.
    #[serde(flatten)]
    pub options: BTreeMap<String, toml::Value>,
}

impl RuleConfig {
    /// Gets a string option with a default value.
    #[must_use]
    pub fn get_str<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.options
            .get(key)
            .and_then(|v| v.as_str())
            .unwrap_or(default)
    }

    /// Gets a string array option.
    #[must_use]
    pub fn get_str_array(&self, key: &str) -> Vec<String> {
        self.options
            .get(key)
            .and_then(|v| v.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.engine.batch_size, 256);
        assert_eq!(config.fail_on(), Severity::Error);
        assert!(config.rules.is_empty());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
preset = "strict"
fail_on = "warning"

[engine]
parallelism = 2
exclude = ["vendor/**", "storage/**"]

[rules.route-name-camel-case]
enabled = false

[rules.table-name]
severity = "info"

[rules.view-file-camel-case]
extensions = [".blade.php", ".twig"]
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.preset.as_deref(), Some("strict"));
        assert_eq!(config.fail_on(), Severity::Warning);
        assert_eq!(config.engine.parallelism, Some(2));
        assert_eq!(config.engine.batch_size, 256);
        let names = config.rule_config("route-name-camel-case").expect("configured");
        assert_eq!(names.enabled, Some(false));
        let tables = config.rule_config("table-name").expect("configured");
        assert_eq!(tables.enabled, None);
        assert_eq!(tables.severity, Some(Severity::Info));

        let view = config.rule_config("view-file-camel-case").expect("configured");
        assert_eq!(view.get_str_array("extensions"), vec![".blade.php", ".twig"]);
        assert_eq!(view.get_str("missing", "fallback"), "fallback");
    }

    #[test]
    fn test_parse_error() {
        let err = Config::parse("preset = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
