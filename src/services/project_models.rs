use tracing::debug;

use crate::domain::project::{
    Complexity, EstimationParams, EstimationResult, ModelComparison, ModelKind, RiskLevel,
};
use crate::services::rounding::round_half_up;

/// Cost per person-month in USD.
pub const COST_PER_PM: f64 = 8000.0;

const COCOMO_A: f64 = 2.94;
const COCOMO_B: f64 = 1.09;

fn cocomo_factor(complexity: Complexity) -> f64 {
    match complexity {
        Complexity::Low => 1.0,
        Complexity::Medium => 1.12,
        Complexity::High => 1.24,
    }
}

fn slim_productivity(complexity: Complexity) -> f64 {
    match complexity {
        Complexity::Low => 2000.0,
        Complexity::Medium => 1500.0,
        Complexity::High => 1000.0,
    }
}

fn rca_multiplier(complexity: Complexity) -> f64 {
    match complexity {
        Complexity::Low => 1.0,
        Complexity::Medium => 1.3,
        Complexity::High => 1.6,
    }
}

/// COCOMO II basic model: `effort = a * KLOC^b * factor`.
pub fn calculate_cocomo(params: &EstimationParams) -> EstimationResult {
    let effort = COCOMO_A * params.project_size.powf(COCOMO_B) * cocomo_factor(params.complexity);
    let duration = 3.67 * effort.powf(0.28);
    let cost = effort * COST_PER_PM;

    let risk = if params.project_size > 50.0 || params.complexity == Complexity::High {
        RiskLevel::High
    } else if params.project_size > 30.0 || params.complexity == Complexity::Medium {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    EstimationResult {
        cost: round_half_up(cost),
        effort,
        duration,
        risk,
    }
}

/// SLIM: effort from productivity, inflated when the team is larger than the
/// optimal team size.
pub fn calculate_slim(params: &EstimationParams) -> EstimationResult {
    let effort = params.project_size * 1000.0 / slim_productivity(params.complexity);
    let optimal_team_size = effort.sqrt();
    let team_efficiency = (optimal_team_size / params.team_size).min(1.0);
    debug!(optimal_team_size, team_efficiency, "slim team efficiency");

    let adjusted_effort = effort / team_efficiency;
    let duration = adjusted_effort / params.team_size;
    let cost = adjusted_effort * COST_PER_PM;

    let risk = if team_efficiency < 0.7 {
        RiskLevel::High
    } else if team_efficiency < 0.85 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    EstimationResult {
        cost: round_half_up(cost),
        effort: adjusted_effort,
        duration,
        risk,
    }
}

/// Resource constraint analysis: effort bounded below by 80% of the capacity
/// the team and timeline provide.
pub fn calculate_rca(params: &EstimationParams) -> EstimationResult {
    let max_effort = params.team_size * params.timeline;
    let required_effort = (params.project_size / 2.0) * rca_multiplier(params.complexity);

    let effort = required_effort.max(max_effort * 0.8);
    let duration = effort / params.team_size;
    let cost = effort * COST_PER_PM;

    let risk = if required_effort > max_effort * 1.2 {
        RiskLevel::High
    } else if required_effort > max_effort {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    EstimationResult {
        cost: round_half_up(cost),
        effort,
        duration,
        risk,
    }
}

pub fn calculate_all_models(params: &EstimationParams) -> ModelComparison {
    ModelComparison {
        cocomo: calculate_cocomo(params),
        slim: calculate_slim(params),
        rca: calculate_rca(params),
    }
}

/// Picks the model with the lowest risk. Earlier models win ties.
pub fn recommended_model(params: &EstimationParams) -> ModelKind {
    recommend_from(&calculate_all_models(params))
}

pub fn recommend_from(results: &ModelComparison) -> ModelKind {
    let mut recommended = ModelKind::Cocomo;
    let mut lowest = results.cocomo.risk.priority();
    for (kind, result) in results.entries().into_iter().skip(1) {
        if result.risk.priority() < lowest {
            recommended = kind;
            lowest = result.risk.priority();
        }
    }
    recommended
}
