use std::fs;
use std::io;

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding persisted EVM inputs.
    pub store_dir: String,
    /// Prefix for costs in printed reports.
    pub currency_symbol: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            store_dir: ".estimates".to_string(),
            currency_symbol: "$".to_string(),
        }
    }
}

impl Settings {
    pub fn from_yaml_file(filepath: &str) -> Result<Self, SettingsError> {
        let contents = fs::read_to_string(filepath)?;
        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(input: &str) -> Result<Self, SettingsError> {
        Ok(serde_yaml::from_str(input)?)
    }

    /// Settings from `filepath` when given, defaults otherwise.
    pub fn load(filepath: Option<&str>) -> Result<Self, SettingsError> {
        match filepath {
            Some(path) => Self::from_yaml_file(path),
            None => Ok(Self::default()),
        }
    }
}
