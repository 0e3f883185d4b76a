use serde::{Deserialize, Serialize};

/// Earned value inputs: budget at completion, planned value, earned value and
/// actual cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvmData {
    pub bac: f64,
    pub pv: f64,
    pub ev: f64,
    pub ac: f64,
}

impl Default for EvmData {
    fn default() -> Self {
        Self {
            bac: 1_000_000.0,
            pv: 600_000.0,
            ev: 550_000.0,
            ac: 580_000.0,
        }
    }
}

/// Indices derived from [`EvmData`]. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EvmMetrics {
    pub cpi: f64,
    pub spi: f64,
    pub cv: f64,
    pub sv: f64,
    pub eac: f64,
    pub vac: f64,
    pub percent_complete: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceStatus {
    OnTrack,
    Warning,
    AtRisk,
}

impl PerformanceStatus {
    pub fn label(self) -> &'static str {
        match self {
            PerformanceStatus::OnTrack => "On Track",
            PerformanceStatus::Warning => "Warning",
            PerformanceStatus::AtRisk => "At Risk",
        }
    }
}

/// Overall rating of a health score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthRating {
    Excellent,
    RequiresAttention,
    Critical,
}

impl HealthRating {
    pub fn label(self) -> &'static str {
        match self {
            HealthRating::Excellent => "Excellent",
            HealthRating::RequiresAttention => "Requires Attention",
            HealthRating::Critical => "Critical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}
