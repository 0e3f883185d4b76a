use serde::{Deserialize, Serialize};

use crate::domain::estimate::ThreePointEstimate;
use crate::domain::project::{Complexity, RiskLevel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FunctionType {
    Input,
    Output,
    File,
    Interface,
    Inquiry,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FpaInput {
    #[serde(rename = "type")]
    pub function_type: FunctionType,
    pub complexity: Complexity,
    pub number_of_elements: f64,
    /// Technical complexity factor in `0..=14`.
    pub technical_factor: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryPointInput {
    #[serde(default)]
    pub description: String,
    pub points: f64,
    /// Points per sprint.
    pub team_velocity: f64,
    pub team_size: f64,
    /// Days.
    pub sprint_length: f64,
}

/// Resource allocation details. Carried with the feature but not used by any
/// of the feature models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceInput {
    pub assigned_resources: f64,
    pub hourly_rate: f64,
    /// Percentage in `0..=30`.
    pub risk_factor: f64,
}

/// A feature and the model inputs that apply to it. A missing block means
/// the model is not applicable, not that its values are zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fpa: Option<FpaInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pert: Option<ThreePointEstimate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story_points: Option<StoryPointInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rca: Option<ResourceInput>,
}

#[cfg(test)]
impl Feature {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            priority: Priority::default(),
            dependencies: Vec::new(),
            fpa: None,
            pert: None,
            story_points: None,
            rca: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FpaResult {
    pub function_points: f64,
    /// Person-days.
    pub effort: f64,
    pub cost: f64,
    /// Days.
    pub duration: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PertResult {
    /// Person-days.
    pub expected_effort: f64,
    pub variance: f64,
    pub standard_deviation: f64,
    pub risk: RiskLevel,
    pub cost: f64,
    /// Days.
    pub duration: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StoryPointResult {
    /// Person-days.
    pub effort: f64,
    pub sprints: f64,
    /// Days.
    pub duration: f64,
    pub cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureEstimation {
    pub feature_id: String,
    pub feature_name: String,
    pub fpa: Option<FpaResult>,
    pub pert: Option<PertResult>,
    pub story_points: Option<StoryPointResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_feature_has_no_model_blocks() {
        let feature = Feature::new("F1", "Login");
        assert_eq!(feature.priority, Priority::Medium);
        assert!(feature.dependencies.is_empty());
        assert_eq!(feature.fpa, None);
        assert_eq!(feature.pert, None);
        assert_eq!(feature.story_points, None);
        assert_eq!(feature.rca, None);
    }
}
