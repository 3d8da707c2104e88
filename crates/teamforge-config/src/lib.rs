//! Configuration system for TeamForge.
//!
//! Load matchmaking settings from the configuration service's JSON
//! records, or from TOML/YAML files, without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use teamforge_config::MatchmakingConfig;
//!
//! let config = MatchmakingConfig::from_toml_str(r#"
//!     isActive = true
//!     teamSizeMin = 2
//!     teamSizeMax = 4
//!
//!     [[constraints]]
//!     rule = "EQUAL"
//!     schools = ["EPITA"]
//!     value = 2
//! "#).unwrap();
//!
//! assert!(config.settings().is_active);
//! assert_eq!(config.settings().constraints.len(), 1);
//! ```
//!
//! Use the stored default when the file is missing:
//!
//! ```
//! use teamforge_config::MatchmakingConfig;
//!
//! let config = MatchmakingConfig::load("matchmaking.toml").unwrap_or_default();
//! assert!(!config.settings().is_active);
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use teamforge_core::{MatchmakingSettings, SchoolConstraint};
use thiserror::Error;
use tracing::warn;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Keys under which the configuration service stores its values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigurationKey {
    Legal,
    Media,
    Texts,
    Phases,
    Partners,
    Matchmaking,
    Themes,
    Mailing,
}

impl ConfigurationKey {
    /// Returns the key as stored by the configuration service.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigurationKey::Legal => "LEGAL",
            ConfigurationKey::Media => "MEDIA",
            ConfigurationKey::Texts => "TEXTS",
            ConfigurationKey::Phases => "PHASES",
            ConfigurationKey::Partners => "PARTNERS",
            ConfigurationKey::Matchmaking => "MATCHMAKING",
            ConfigurationKey::Themes => "THEMES",
            ConfigurationKey::Mailing => "MAILING",
        }
    }

    /// Returns true when the value may be read without authentication.
    pub fn is_public(&self) -> bool {
        !matches!(
            self,
            ConfigurationKey::Matchmaking | ConfigurationKey::Mailing
        )
    }
}

impl fmt::Display for ConfigurationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigurationKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LEGAL" => Ok(ConfigurationKey::Legal),
            "MEDIA" => Ok(ConfigurationKey::Media),
            "TEXTS" => Ok(ConfigurationKey::Texts),
            "PHASES" => Ok(ConfigurationKey::Phases),
            "PARTNERS" => Ok(ConfigurationKey::Partners),
            "MATCHMAKING" => Ok(ConfigurationKey::Matchmaking),
            "THEMES" => Ok(ConfigurationKey::Themes),
            "MAILING" => Ok(ConfigurationKey::Mailing),
            other => Err(ConfigError::Invalid(format!(
                "unknown configuration key `{other}`"
            ))),
        }
    }
}

/// A record as returned by the configuration service.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationRecord {
    #[serde(default)]
    pub id: String,
    pub key: String,
    pub value: serde_json::Value,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Matchmaking configuration.
///
/// Loaders only parse; call [`MatchmakingConfig::validate`] to check the
/// settings for organizer mistakes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct MatchmakingConfig {
    settings: MatchmakingSettings,
}

impl From<MatchmakingSettings> for MatchmakingConfig {
    fn from(settings: MatchmakingSettings) -> Self {
        Self { settings }
    }
}

impl MatchmakingConfig {
    /// Creates the default configuration (inactive, teams of one).
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the wrapped settings.
    pub fn settings(&self) -> &MatchmakingSettings {
        &self.settings
    }

    /// Unwraps the settings.
    pub fn into_settings(self) -> MatchmakingSettings {
        self.settings
    }

    /// Loads configuration from a file, picking the format from its extension.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, has an unsupported
    /// extension, or doesn't parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_file(path),
            Some("toml") => Self::from_toml_file(path),
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            other => Err(ConfigError::Invalid(format!(
                "unsupported configuration format: {}",
                other.unwrap_or("<none>")
            ))),
        }
    }

    /// Loads configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Parses configuration from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Extracts matchmaking settings from a configuration service record.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the record is stored under
    /// another key, and [`ConfigError::Json`] when its value doesn't parse.
    pub fn from_configuration_record(record: ConfigurationRecord) -> Result<Self, ConfigError> {
        let key: ConfigurationKey = record.key.parse()?;
        if key != ConfigurationKey::Matchmaking {
            return Err(ConfigError::Invalid(format!(
                "expected a {} record, got {}",
                ConfigurationKey::Matchmaking,
                key
            )));
        }
        Ok(serde_json::from_value(record.value)?)
    }

    /// Toggles the master switch.
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.settings.is_active = is_active;
        self
    }

    /// Sets the inclusive team size bounds.
    pub fn with_team_size(mut self, min: usize, max: usize) -> Self {
        self.settings.team_size_min = min;
        self.settings.team_size_max = max;
        self
    }

    /// Adds a school constraint.
    pub fn with_constraint(mut self, constraint: SchoolConstraint) -> Self {
        self.settings.constraints.push(constraint);
        self
    }

    /// Checks the settings for organizer mistakes.
    ///
    /// A `multiple` flag that disagrees with the number of schools is only
    /// logged, since evaluation ignores the flag.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.settings
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        for (index, constraint) in self.settings.constraints.iter().enumerate() {
            if constraint.multiple != constraint.is_pooled() {
                warn!(
                    constraint = index,
                    multiple = constraint.multiple,
                    schools = constraint.schools.len(),
                    "`multiple` flag disagrees with the number of schools"
                );
            }
        }
        Ok(())
    }
}
