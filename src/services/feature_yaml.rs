use std::collections::HashSet;
use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::feature::Feature;

#[derive(Error, Debug)]
pub enum FeatureYamlError {
    #[error("failed to read feature yaml: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse feature yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("missing feature id")]
    MissingFeatureId,
    #[error("duplicate feature id {0}")]
    DuplicateFeatureId(String),
}

#[derive(Serialize, Deserialize)]
struct FeatureFileRecord {
    features: Vec<Feature>,
}

pub fn load_features_from_yaml_file(path: &str) -> Result<Vec<Feature>, FeatureYamlError> {
    let contents = std::fs::read_to_string(path)?;
    deserialize_features_from_yaml_str(&contents)
}

pub fn deserialize_features_from_yaml_str(input: &str) -> Result<Vec<Feature>, FeatureYamlError> {
    let record: FeatureFileRecord = serde_yaml::from_str(input)?;
    let mut seen = HashSet::new();
    for feature in &record.features {
        if feature.id.trim().is_empty() {
            return Err(FeatureYamlError::MissingFeatureId);
        }
        if !seen.insert(feature.id.as_str()) {
            return Err(FeatureYamlError::DuplicateFeatureId(feature.id.clone()));
        }
    }
    Ok(record.features)
}
