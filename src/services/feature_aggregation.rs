use serde::Serialize;

use crate::domain::feature::{Feature, FeatureEstimation};
use crate::domain::project::RiskLevel;
use crate::services::feature_models::calculate_feature_estimations;
use crate::services::rounding::round_half_up;

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct FpaTotals {
    pub total_effort: f64,
    pub total_cost: f64,
    pub total_duration: f64,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct PertTotals {
    pub total_effort: f64,
    pub total_cost: f64,
    pub total_duration: f64,
    pub average_risk: RiskLevel,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct StoryPointTotals {
    pub total_effort: f64,
    pub total_cost: f64,
    pub total_duration: f64,
    pub total_sprints: f64,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct FeatureAggregate {
    pub fpa: FpaTotals,
    pub pert: PertTotals,
    pub story_points: StoryPointTotals,
}

/// Average cost and range across a set of model results.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct CostSummary {
    pub average: f64,
    pub min: f64,
    pub max: f64,
}

/// Totals per model across all features the model applies to. Effort and
/// cost are summed; duration and sprints take the maximum since features are
/// worked on in parallel. A model that applies to no feature reports zeros.
pub fn aggregate_feature_estimations(features: &[Feature]) -> FeatureAggregate {
    let results: Vec<FeatureEstimation> = features.iter().map(calculate_feature_estimations).collect();
    aggregate_estimations(&results)
}

pub fn aggregate_estimations(results: &[FeatureEstimation]) -> FeatureAggregate {
    let fpa: Vec<_> = results.iter().filter_map(|r| r.fpa).collect();
    let pert: Vec<_> = results.iter().filter_map(|r| r.pert).collect();
    let story: Vec<_> = results.iter().filter_map(|r| r.story_points).collect();

    FeatureAggregate {
        fpa: FpaTotals {
            total_effort: fpa.iter().map(|r| r.effort).sum(),
            total_cost: fpa.iter().map(|r| r.cost).sum(),
            total_duration: max_or_zero(fpa.iter().map(|r| r.duration)),
        },
        pert: PertTotals {
            total_effort: pert.iter().map(|r| r.expected_effort).sum(),
            total_cost: pert.iter().map(|r| r.cost).sum(),
            total_duration: max_or_zero(pert.iter().map(|r| r.duration)),
            average_risk: average_risk(pert.iter().map(|r| r.risk)),
        },
        story_points: StoryPointTotals {
            total_effort: story.iter().map(|r| r.effort).sum(),
            total_cost: story.iter().map(|r| r.cost).sum(),
            total_duration: max_or_zero(story.iter().map(|r| r.duration)),
            total_sprints: max_or_zero(story.iter().map(|r| r.sprints)),
        },
    }
}

/// Averages risk scores (low 1, medium 2, high 3) and buckets the mean.
pub fn average_risk<I>(risks: I) -> RiskLevel
where
    I: IntoIterator<Item = RiskLevel>,
{
    let (sum, count) = risks
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), risk| (sum + risk.score(), count + 1));
    if count == 0 {
        return RiskLevel::Low;
    }

    let average = sum / count as f64;
    if average <= 1.5 {
        RiskLevel::Low
    } else if average <= 2.5 {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

pub fn summarize_costs(costs: &[f64]) -> Option<CostSummary> {
    if costs.is_empty() {
        return None;
    }
    let total: f64 = costs.iter().sum();
    Some(CostSummary {
        average: round_half_up(total / costs.len() as f64),
        min: costs.iter().copied().fold(f64::INFINITY, f64::min),
        max: costs.iter().copied().fold(f64::NEG_INFINITY, f64::max),
    })
}

fn max_or_zero<I: Iterator<Item = f64>>(values: I) -> f64 {
    values.fold(None, |acc: Option<f64>, value| {
        Some(acc.map_or(value, |current| current.max(value)))
    })
    .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::estimate::ThreePointEstimate;
    use crate::domain::feature::{FpaInput, FunctionType, StoryPointInput};
    use crate::domain::project::Complexity;

    fn feature_with_pert(id: &str, estimate: (f64, f64, f64)) -> Feature {
        let mut feature = Feature::new(id, id);
        feature.pert = Some(ThreePointEstimate::new(estimate.0, estimate.1, estimate.2));
        feature
    }

    fn feature_with_story_points(id: &str, points: f64) -> Feature {
        let mut feature = Feature::new(id, id);
        feature.story_points = Some(StoryPointInput {
            description: String::new(),
            points,
            team_velocity: 10.0,
            team_size: 2.0,
            sprint_length: 10.0,
        });
        feature
    }

    #[test]
    fn empty_feature_list_reports_zeros() {
        let aggregate = aggregate_feature_estimations(&[]);
        assert_eq!(aggregate.fpa.total_duration, 0.0);
        assert_eq!(aggregate.pert.total_duration, 0.0);
        assert_eq!(aggregate.pert.average_risk, RiskLevel::Low);
        assert_eq!(aggregate.story_points.total_duration, 0.0);
        assert_eq!(aggregate.story_points.total_sprints, 0.0);
    }

    #[test]
    fn durations_take_the_maximum_while_costs_add_up() {
        let features = vec![
            feature_with_pert("A", (3.0, 5.0, 8.0)),
            feature_with_pert("B", (8.0, 10.0, 12.0)),
            Feature::new("C", "no models"),
        ];
        let aggregate = aggregate_feature_estimations(&features);

        // A: effort 5.2, cost 2583, duration 5; B: effort 10, cost 5000, duration 10
        assert!((aggregate.pert.total_effort - 15.2).abs() < 1e-9);
        assert_eq!(aggregate.pert.total_cost, 7583.0);
        assert_eq!(aggregate.pert.total_duration, 10.0);
        assert_eq!(aggregate.pert.average_risk, RiskLevel::Low);
        assert_eq!(aggregate.fpa.total_cost, 0.0);
    }

    #[test]
    fn story_point_sprints_take_the_maximum() {
        let features = vec![
            feature_with_story_points("A", 15.0),
            feature_with_story_points("B", 35.0),
        ];
        let aggregate = aggregate_feature_estimations(&features);
        assert_eq!(aggregate.story_points.total_sprints, 4.0);
        assert_eq!(aggregate.story_points.total_duration, 40.0);
        // effort per feature = sprints * 10 * 5
        assert_eq!(aggregate.story_points.total_effort, 300.0);
    }

    #[test]
    fn fpa_totals_sum_rounded_feature_values() {
        let mut feature = Feature::new("F", "F");
        feature.fpa = Some(FpaInput {
            function_type: FunctionType::Input,
            complexity: Complexity::Medium,
            number_of_elements: 10.0,
            technical_factor: 7.0,
        });
        let aggregate = aggregate_feature_estimations(&[feature.clone(), feature]);
        assert!((aggregate.fpa.total_effort - 28.8).abs() < 1e-9);
        assert_eq!(aggregate.fpa.total_cost, 14_400.0);
        assert_eq!(aggregate.fpa.total_duration, 14.0);
    }

    #[test]
    fn average_risk_buckets_the_mean() {
        use RiskLevel::*;
        assert_eq!(average_risk([Low, Medium]), Low);
        assert_eq!(average_risk([Low, High]), Medium);
        assert_eq!(average_risk([Medium, High]), Medium);
        assert_eq!(average_risk([Medium, High, High]), High);
        assert_eq!(average_risk(Vec::<RiskLevel>::new()), Low);
    }

    #[test]
    fn summarize_costs_reports_average_and_range() {
        let summary = summarize_costs(&[100.0, 250.0, 402.0]).unwrap();
        assert_eq!(summary.average, 251.0);
        assert_eq!(summary.min, 100.0);
        assert_eq!(summary.max, 402.0);
        assert_eq!(summarize_costs(&[]), None);
    }
}
