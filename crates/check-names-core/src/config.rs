//! Configuration types for check-names.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Top-level configuration for check-names.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Analyzer configuration.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Spelling check configuration.
    #[serde(default)]
    pub spelling: SpellingConfig,

    /// Per-rule configurations, keyed by rule name or code.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
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

    /// Gets the configuration for a rule, looked up by name first, then code.
    #[must_use]
    pub fn rule_config(&self, name: &str, code: &str) -> Option<&RuleConfig> {
        self.rules.get(name).or_else(|| self.rules.get(code))
    }

    /// Checks if a rule is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, name: &str, code: &str) -> bool {
        self.rule_config(name, code)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }
}

/// Analyzer-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Glob patterns; declarations in matching files are skipped.
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Spelling check configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpellingConfig {
    /// Whether spelling checks run at all.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Dictionary file of whitespace-separated words.
    #[serde(default)]
    pub dictionary: Option<PathBuf>,

    /// Tokens shorter than this are never checked.
    #[serde(default = "default_min_length")]
    pub min_token_length: usize,

    /// Names shorter than this are never checked.
    #[serde(default = "default_min_length")]
    pub min_name_length: usize,

    /// Distances at or above this are not reported.
    #[serde(default = "default_max_distance")]
    pub max_distance: usize,
}

impl Default for SpellingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dictionary: None,
            min_token_length: default_min_length(),
            min_name_length: default_min_length(),
            max_distance: default_max_distance(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_min_length() -> usize {
    4
}

fn default_max_distance() -> usize {
    4
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled. A disabled rule still claims the
    /// declarations it selects but accepts every name.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Regular expression replacing the rule's built-in pattern.
    #[serde(default)]
    pub pattern: Option<String>,
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
        assert!(config.spelling.enabled);
        assert_eq!(config.spelling.min_token_length, 4);
        assert_eq!(config.spelling.max_distance, 4);
        assert!(config.rules.is_empty());
        assert!(config.analyzer.exclude.is_empty());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[analyzer]
exclude = ["/usr/include/**"]

[spelling]
dictionary = "words.txt"
max_distance = 3

[rules.const-case]
enabled = false

[rules.CN003]
pattern = "^[a-z]+$"
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.analyzer.exclude, ["/usr/include/**"]);
        assert_eq!(config.spelling.dictionary, Some(PathBuf::from("words.txt")));
        assert_eq!(config.spelling.max_distance, 3);
        assert_eq!(config.spelling.min_token_length, 4);
        assert!(config.spelling.enabled);

        assert!(!config.is_rule_enabled("const-case", "CN001"));
        assert!(config.is_rule_enabled("snake-case", "CN003"));
        let snake = config.rule_config("snake-case", "CN003").unwrap();
        assert_eq!(snake.pattern.as_deref(), Some("^[a-z]+$"));
    }

    #[test]
    fn test_parse_error() {
        let err = Config::parse("[spelling\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
