use serde::Serialize;

use crate::domain::estimate::ThreePointEstimate;

/// An activity in a PERT network. Expected time and variance are derived from
/// the estimate once, at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct PertTask {
    pub id: String,
    pub task_name: String,
    pub dependencies: Vec<String>,
    estimate: ThreePointEstimate,
    expected_time: f64,
    variance: f64,
}

impl PertTask {
    pub fn new(
        id: &str,
        task_name: &str,
        estimate: ThreePointEstimate,
        dependencies: &[&str],
    ) -> Self {
        Self {
            id: id.to_string(),
            task_name: task_name.to_string(),
            dependencies: dependencies.iter().map(|dep| (*dep).to_string()).collect(),
            estimate,
            expected_time: estimate.expected(),
            variance: estimate.variance(),
        }
    }

    pub fn estimate(&self) -> ThreePointEstimate {
        self.estimate
    }

    pub fn expected_time(&self) -> f64 {
        self.expected_time
    }

    pub fn variance(&self) -> f64 {
        self.variance
    }
}

/// Scheduling result for one task.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PertNode {
    pub id: String,
    pub task_name: String,
    pub duration: f64,
    pub es: f64,
    pub ef: f64,
    pub ls: f64,
    pub lf: f64,
    pub slack: f64,
    pub is_critical: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PertSchedule {
    pub nodes: Vec<PertNode>,
    pub total_duration: f64,
    pub critical_path: Vec<String>,
    pub critical_path_variance: f64,
}

#[cfg(test)]
impl PertSchedule {
    pub fn node(&self, id: &str) -> Option<&PertNode> {
        self.nodes.iter().find(|node| node.id == id)
    }
}
