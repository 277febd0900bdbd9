use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Inputs for the demonstration run.
///
/// Every field is optional in the TOML file; missing fields fall back to the
/// values of [`DemoConfig::default`], which reproduce the textbook scenarios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub stack_capacity: usize,
    pub stack_items: Vec<i64>,
    pub queue_items: Vec<String>,
    pub list_items: Vec<i64>,
    pub list_prepend: Option<i64>,
    pub list_delete: Vec<i64>,
    pub bst_keys: Vec<i64>,
    pub bst_delete: Vec<i64>,
    pub log_level: String,
    pub output: OutputFormat,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            stack_capacity: 3,
            stack_items: vec![10, 20, 30, 40],
            queue_items: vec!["First".into(), "Second".into(), "Third".into()],
            list_items: vec![10, 20, 30],
            list_prepend: Some(5),
            list_delete: vec![20, 99],
            bst_keys: vec![50, 30, 70, 20, 40, 60, 80],
            bst_delete: vec![30],
            log_level: "info".into(),
            output: OutputFormat::Text,
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|err| ConfigError::io(path, err))?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::invalid(
                "log_level",
                format!("'{}' is not one of {}", self.log_level, LOG_LEVELS.join(", ")),
            ));
        }
        Ok(())
    }
}
