use crate::domain::feature::{
    Feature, FeatureEstimation, FpaInput, FpaResult, FunctionType, PertResult, StoryPointInput,
    StoryPointResult,
};
use crate::domain::estimate::ThreePointEstimate;
use crate::domain::project::{Complexity, RiskLevel};
use crate::services::rounding::{round_half_up, round_to};

/// Cost per person-day in USD.
pub const COST_PER_PD: f64 = 500.0;

/// Person-days per function point.
pub const FP_TO_EFFORT_RATIO: f64 = 0.5;

/// Unadjusted function point weight for a function type and complexity.
pub fn fpa_weight(function_type: FunctionType, complexity: Complexity) -> f64 {
    let [low, medium, high] = match function_type {
        FunctionType::Input => [3.0, 4.0, 6.0],
        FunctionType::Output => [4.0, 5.0, 7.0],
        FunctionType::File => [7.0, 10.0, 15.0],
        FunctionType::Interface => [5.0, 7.0, 10.0],
        FunctionType::Inquiry => [3.0, 4.0, 6.0],
    };
    match complexity {
        Complexity::Low => low,
        Complexity::Medium => medium,
        Complexity::High => high,
    }
}

pub fn calculate_fpa(feature: &Feature) -> Option<FpaResult> {
    feature.fpa.as_ref().map(function_points)
}

fn function_points(input: &FpaInput) -> FpaResult {
    let ufp = input.number_of_elements * fpa_weight(input.function_type, input.complexity);
    let tcf = 0.65 + 0.01 * input.technical_factor;
    let function_points = ufp * tcf;

    let effort = function_points * FP_TO_EFFORT_RATIO;
    let cost = effort * COST_PER_PD;
    // single resource
    let duration = effort;

    FpaResult {
        function_points: round_to(function_points, 1),
        effort: round_to(effort, 1),
        cost: round_half_up(cost),
        duration: round_half_up(duration),
    }
}

pub fn calculate_pert(feature: &Feature) -> Option<PertResult> {
    feature.pert.as_ref().map(three_point)
}

fn three_point(estimate: &ThreePointEstimate) -> PertResult {
    let expected_effort = estimate.expected();
    let variance = estimate.variance();
    let standard_deviation = estimate.standard_deviation();

    let risk = if standard_deviation > 5.0 {
        RiskLevel::High
    } else if standard_deviation > 2.0 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    PertResult {
        expected_effort: round_to(expected_effort, 1),
        variance: round_to(variance, 2),
        standard_deviation: round_to(standard_deviation, 1),
        risk,
        cost: round_half_up(expected_effort * COST_PER_PD),
        duration: round_half_up(expected_effort),
    }
}

pub fn calculate_story_points(feature: &Feature) -> Option<StoryPointResult> {
    feature.story_points.as_ref().map(story_points)
}

fn story_points(input: &StoryPointInput) -> StoryPointResult {
    let sprints = (input.points / input.team_velocity).ceil();
    let duration = sprints * input.sprint_length;

    // Team size is applied to both effort and cost; kept as-is for
    // compatibility with existing estimates.
    let effort = (duration / input.sprint_length)
        * input.team_velocity
        * (input.sprint_length / input.team_size);
    let cost = effort * COST_PER_PD * input.team_size;

    StoryPointResult {
        effort: round_to(effort, 1),
        sprints,
        duration,
        cost: round_half_up(cost),
    }
}

pub fn calculate_feature_estimations(feature: &Feature) -> FeatureEstimation {
    FeatureEstimation {
        feature_id: feature.id.clone(),
        feature_name: feature.name.clone(),
        fpa: calculate_fpa(feature),
        pert: calculate_pert(feature),
        story_points: calculate_story_points(feature),
    }
}
