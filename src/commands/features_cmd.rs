use serde::Serialize;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_feature_report;
use crate::domain::feature::FeatureEstimation;
use crate::services::feature_aggregation::{FeatureAggregate, aggregate_feature_estimations};
use crate::services::feature_models::calculate_feature_estimations;
use crate::services::feature_yaml::load_features_from_yaml_file;
use crate::services::settings_yaml::Settings;

#[derive(Serialize)]
struct FeatureReport {
    estimations: Vec<FeatureEstimation>,
    totals: FeatureAggregate,
}

pub fn features_command(cmd: Commands, settings: &Settings) {
    if let Commands::Features { input, output } = cmd {
        let features = match load_features_from_yaml_file(&input) {
            Ok(features) => features,
            Err(e) => {
                eprintln!("Failed to load features: {e:?}");
                return;
            }
        };

        let estimations: Vec<FeatureEstimation> =
            features.iter().map(calculate_feature_estimations).collect();
        let totals = aggregate_feature_estimations(&features);

        println!(
            "{}",
            format_feature_report(&estimations, &totals, &settings.currency_symbol)
        );

        if let Some(output) = output {
            let report = FeatureReport {
                estimations,
                totals,
            };
            let yaml = match serde_yaml::to_string(&report) {
                Ok(contents) => contents,
                Err(e) => {
                    eprintln!("Failed to serialize feature estimates: {e:?}");
                    return;
                }
            };
            if let Err(e) = std::fs::write(&output, yaml) {
                eprintln!("Failed to write feature estimates: {e:?}");
            } else {
                println!("Feature estimates written to {output}");
            }
        }
    }
}
