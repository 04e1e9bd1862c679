//! Extractor configuration
//!
//! The defaults describe tree-sitter `grammar.js` files. A YAML or JSON file can
//! override any subset of the fields:
//!
//! ```yaml
//! block_marker: "export default grammar({"
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

pub const DEFAULT_BLOCK_MARKER: &str = "module.exports = grammar({";
pub const DEFAULT_COMMENT_PREFIX: &str = "//";
pub const DEFAULT_HIDDEN_PREFIX: &str = "_";

/// Markers recognized by the token scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Prefix of the (trimmed) line that opens the rule table
    pub block_marker: String,
    /// Prefix of (trimmed) comment lines inside the block
    pub comment_prefix: String,
    /// Rule-name prefix marking internal rules
    pub hidden_prefix: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            block_marker: DEFAULT_BLOCK_MARKER.to_string(),
            comment_prefix: DEFAULT_COMMENT_PREFIX.to_string(),
            hidden_prefix: DEFAULT_HIDDEN_PREFIX.to_string(),
        }
    }
}

/// Error that can occur while loading a configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The configuration file could not be read
    Io { path: String, message: String },
    /// The configuration document is malformed
    Parse(String),
    /// An empty block marker would open the block on the first line
    EmptyMarker,
    /// An empty comment prefix would skip every line in the block
    EmptyCommentPrefix,
    /// An empty hidden prefix would hide every rule
    EmptyHiddenPrefix,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, message } => {
                write!(f, "Cannot read config '{path}': {message}")
            }
            ConfigError::Parse(msg) => write!(f, "Invalid config: {msg}"),
            ConfigError::EmptyMarker => write!(f, "Invalid config: block_marker must not be empty"),
            ConfigError::EmptyCommentPrefix => {
                write!(f, "Invalid config: comment_prefix must not be empty")
            }
            ConfigError::EmptyHiddenPrefix => {
                write!(f, "Invalid config: hidden_prefix must not be empty")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl ExtractorConfig {
    /// Replace the block marker, keeping the other fields
    pub fn with_block_marker(mut self, marker: impl Into<String>) -> Self {
        self.block_marker = marker.into();
        self
    }

    /// Reject prefixes that would match every line or every rule
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.block_marker.is_empty() {
            return Err(ConfigError::EmptyMarker);
        }
        if self.comment_prefix.is_empty() {
            return Err(ConfigError::EmptyCommentPrefix);
        }
        if self.hidden_prefix.is_empty() {
            return Err(ConfigError::EmptyHiddenPrefix);
        }
        Ok(())
    }

    /// Parse a YAML document. Fields it omits keep their defaults.
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_yaml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON document. Fields it omits keep their defaults.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file: JSON for a `.json` extension, YAML otherwise
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&source),
            _ => Self::from_yaml_str(&source),
        }
    }
}
