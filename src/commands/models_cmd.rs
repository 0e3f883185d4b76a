use serde::Serialize;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_model_comparison;
use crate::domain::project::{EstimationParams, ModelComparison, ModelKind};
use crate::services::feature_aggregation::{CostSummary, summarize_costs};
use crate::services::project_models::{calculate_all_models, recommended_model};
use crate::services::settings_yaml::Settings;

#[derive(Serialize)]
struct ModelReport {
    params: EstimationParams,
    results: ModelComparison,
    cost_summary: Option<CostSummary>,
    recommended: ModelKind,
}

pub fn models_command(cmd: Commands, settings: &Settings) {
    if let Commands::Models {
        project_size,
        team_size,
        timeline,
        complexity,
        output,
    } = cmd
    {
        if project_size <= 0.0 || team_size <= 0.0 || timeline <= 0.0 {
            eprintln!("Failed to estimate project: size, team size and timeline must be positive");
            return;
        }

        let params = EstimationParams {
            project_size,
            team_size,
            timeline,
            complexity,
        };
        let results = calculate_all_models(&params);
        let costs: Vec<f64> = results.entries().iter().map(|(_, result)| result.cost).collect();
        let cost_summary = summarize_costs(&costs);
        let recommended = recommended_model(&params);

        println!(
            "{}",
            format_model_comparison(
                &results,
                cost_summary.as_ref(),
                recommended,
                &settings.currency_symbol
            )
        );

        if let Some(output) = output {
            let report = ModelReport {
                params,
                results,
                cost_summary,
                recommended,
            };
            let yaml = match serde_yaml::to_string(&report) {
                Ok(contents) => contents,
                Err(e) => {
                    eprintln!("Failed to serialize model comparison: {e:?}");
                    return;
                }
            };
            if let Err(e) = std::fs::write(&output, yaml) {
                eprintln!("Failed to write model comparison: {e:?}");
            } else {
                println!("Model comparison written to {output}");
            }
        }
    }
}
