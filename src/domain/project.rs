use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Ordinal used when recommending a model; lower is preferred.
    pub fn priority(self) -> u8 {
        match self {
            RiskLevel::Low => 0,
            RiskLevel::Medium => 1,
            RiskLevel::High => 2,
        }
    }

    /// Value used when averaging risk across features.
    pub fn score(self) -> f64 {
        match self {
            RiskLevel::Low => 1.0,
            RiskLevel::Medium => 2.0,
            RiskLevel::High => 3.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Project-level inputs shared by COCOMO II, SLIM and RCA.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimationParams {
    /// Thousands of lines of code.
    pub project_size: f64,
    pub team_size: f64,
    /// Months.
    pub timeline: f64,
    pub complexity: Complexity,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimationResult {
    pub cost: f64,
    /// Person-months.
    pub effort: f64,
    /// Months.
    pub duration: f64,
    pub risk: RiskLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    Cocomo,
    Slim,
    Rca,
}

impl ModelKind {
    pub fn display_name(self) -> &'static str {
        match self {
            ModelKind::Cocomo => "COCOMO II",
            ModelKind::Slim => "SLIM",
            ModelKind::Rca => "RCA Price",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelComparison {
    pub cocomo: EstimationResult,
    pub slim: EstimationResult,
    pub rca: EstimationResult,
}

impl ModelComparison {
    /// Results in recommendation order: cocomo, slim, rca.
    pub fn entries(&self) -> [(ModelKind, &EstimationResult); 3] {
        [
            (ModelKind::Cocomo, &self.cocomo),
            (ModelKind::Slim, &self.slim),
            (ModelKind::Rca, &self.rca),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_priority_and_score_are_ordered() {
        assert!(RiskLevel::Low.priority() < RiskLevel::Medium.priority());
        assert!(RiskLevel::Medium.priority() < RiskLevel::High.priority());
        assert_eq!(RiskLevel::Low.score(), 1.0);
        assert_eq!(RiskLevel::High.score(), 3.0);
    }
}
