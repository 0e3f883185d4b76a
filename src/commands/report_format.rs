use crate::domain::evm::{EvmData, EvmMetrics, Trend};
use crate::domain::feature::FeatureEstimation;
use crate::domain::pert_task::PertSchedule;
use crate::domain::project::{ModelComparison, ModelKind};
use crate::services::evm::{
    format_currency, format_currency_with, format_decimal, health_rating, health_score,
    key_findings, performance_status, trend, variance_status,
};
use crate::services::feature_aggregation::{CostSummary, FeatureAggregate};

pub fn format_model_comparison(
    comparison: &ModelComparison,
    summary: Option<&CostSummary>,
    recommended: ModelKind,
    currency: &str,
) -> String {
    let mut lines = Vec::new();
    lines.push("Model Comparison".to_string());
    lines.push("Model | Cost | Effort (PM) | Duration (months) | Risk".to_string());
    lines.push("------|------|-------------|-------------------|-----".to_string());
    for (kind, result) in comparison.entries() {
        lines.push(format!(
            "{} | {} | {:.1} | {:.1} | {}",
            kind.display_name(),
            format_currency_with(result.cost, currency),
            result.effort,
            result.duration,
            result.risk
        ));
    }

    if let Some(summary) = summary {
        lines.push(String::new());
        lines.push(format!(
            "Average cost: {}",
            format_currency_with(summary.average, currency)
        ));
        lines.push(format!(
            "Cost range: {} - {}",
            format_currency_with(summary.min, currency),
            format_currency_with(summary.max, currency)
        ));
    }
    lines.push(format!("Recommended model: {}", recommended.display_name()));

    lines.join("\n")
}

pub fn format_feature_report(
    estimations: &[FeatureEstimation],
    aggregate: &FeatureAggregate,
    currency: &str,
) -> String {
    let mut lines = Vec::new();
    lines.push("Feature Estimates".to_string());

    for estimation in estimations {
        lines.push(format!("{} {}", estimation.feature_id, estimation.feature_name));
        if let Some(fpa) = &estimation.fpa {
            lines.push(format!(
                "  FPA: {:.1} FP | effort {:.1} days | cost {} | duration {} days",
                fpa.function_points,
                fpa.effort,
                format_currency_with(fpa.cost, currency),
                fpa.duration
            ));
        }
        if let Some(pert) = &estimation.pert {
            lines.push(format!(
                "  PERT: expected {:.1} days | std dev {:.1} | risk {} | cost {} | duration {} days",
                pert.expected_effort,
                pert.standard_deviation,
                pert.risk,
                format_currency_with(pert.cost, currency),
                pert.duration
            ));
        }
        if let Some(story_points) = &estimation.story_points {
            lines.push(format!(
                "  Story points: {} sprints | effort {:.1} days | cost {} | duration {} days",
                story_points.sprints,
                story_points.effort,
                format_currency_with(story_points.cost, currency),
                story_points.duration
            ));
        }
        if estimation.fpa.is_none() && estimation.pert.is_none() && estimation.story_points.is_none()
        {
            lines.push("  no estimation inputs".to_string());
        }
    }

    lines.push(String::new());
    lines.push("Totals".to_string());
    lines.push("Model | Effort (days) | Cost | Duration (days) | Notes".to_string());
    lines.push("------|---------------|------|-----------------|------".to_string());
    lines.push(format!(
        "FPA | {:.1} | {} | {} |",
        aggregate.fpa.total_effort,
        format_currency_with(aggregate.fpa.total_cost, currency),
        aggregate.fpa.total_duration
    ));
    lines.push(format!(
        "PERT | {:.1} | {} | {} | average risk {}",
        aggregate.pert.total_effort,
        format_currency_with(aggregate.pert.total_cost, currency),
        aggregate.pert.total_duration,
        aggregate.pert.average_risk
    ));
    lines.push(format!(
        "Story points | {:.1} | {} | {} | {} sprints",
        aggregate.story_points.total_effort,
        format_currency_with(aggregate.story_points.total_cost, currency),
        aggregate.story_points.total_duration,
        aggregate.story_points.total_sprints
    ));

    lines.join("\n")
}

pub fn format_schedule_report(schedule: &PertSchedule) -> String {
    let mut lines = Vec::new();
    lines.push("PERT Schedule".to_string());
    lines.push("Task | Name | Duration | ES | EF | LS | LF | Slack | Critical".to_string());
    lines.push("-----|------|----------|----|----|----|----|-------|---------".to_string());
    for node in &schedule.nodes {
        lines.push(format!(
            "{} | {} | {:.2} | {:.2} | {:.2} | {:.2} | {:.2} | {:.2} | {}",
            node.id,
            node.task_name,
            node.duration,
            node.es,
            node.ef,
            node.ls,
            node.lf,
            node.slack,
            if node.is_critical { "yes" } else { "no" }
        ));
    }
    lines.push(String::new());
    lines.push(format!("Total duration: {:.2} days", schedule.total_duration));
    lines.push(format!("Critical path: {}", schedule.critical_path.join(" → ")));
    lines.push(format!(
        "Critical path std dev: {:.2} days",
        schedule.critical_path_variance.sqrt()
    ));

    lines.join("\n")
}

/// EVM figures are always shown in US dollars.
pub fn format_evm_report(data: &EvmData, metrics: &EvmMetrics) -> String {
    let mut lines = Vec::new();
    lines.push("Earned Value Analysis".to_string());
    lines.push(format!(
        "BAC: {} | PV: {} | EV: {} | AC: {}",
        format_currency(data.bac),
        format_currency(data.pv),
        format_currency(data.ev),
        format_currency(data.ac)
    ));
    lines.push(String::new());
    lines.push(format_index_row("CPI", metrics.cpi));
    lines.push(format_index_row("SPI", metrics.spi));
    lines.push(format!(
        "CV: {} ({})",
        format_currency(metrics.cv),
        variance_status(metrics.cv).label()
    ));
    lines.push(format!(
        "SV: {} ({})",
        format_currency(metrics.sv),
        variance_status(metrics.sv).label()
    ));
    lines.push(format!("EAC: {}", format_currency(metrics.eac)));
    lines.push(format!("VAC: {}", format_currency(metrics.vac)));
    lines.push(format!(
        "Percent complete: {}%",
        format_decimal(metrics.percent_complete, 1)
    ));

    let score = health_score(metrics.cpi, metrics.spi);
    lines.push(format!(
        "Health score: {score} ({})",
        health_rating(score).label()
    ));
    lines.push(String::new());
    lines.push("Key findings:".to_string());
    for finding in key_findings(metrics) {
        lines.push(format!("- {finding}"));
    }

    lines.join("\n")
}

fn format_index_row(label: &str, index: f64) -> String {
    let arrow = match trend(index) {
        Trend::Up => "up",
        Trend::Down => "down",
    };
    format!(
        "{label}: {} ({}, trending {arrow})",
        format_decimal(index, 3),
        performance_status(index).label()
    )
}
