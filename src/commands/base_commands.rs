use chrono::Local;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::domain::project::Complexity;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
    /// Optional settings YAML
    #[arg(long, global = true)]
    pub config: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare COCOMO II, SLIM and RCA estimates for a whole project
    Models {
        /// Project size in KLOC
        #[arg(short = 's', long)]
        project_size: f64,
        /// Team size in persons
        #[arg(short, long)]
        team_size: f64,
        /// Planned timeline in months
        #[arg(short = 'm', long)]
        timeline: f64,
        /// Project complexity
        #[arg(short, long, value_enum, default_value_t = Complexity::Medium)]
        complexity: Complexity,
        /// Optional output YAML file
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Estimate features with FPA, PERT and story points
    Features {
        /// Feature YAML file
        #[arg(short, long)]
        input: String,
        /// Optional output YAML file
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Solve a PERT task network and write its diagrams as Markdown
    Schedule {
        /// Task YAML file
        #[arg(short, long, required_unless_present = "sample")]
        input: Option<String>,
        /// Output file; Markdown diagrams, or the solved schedule when it ends in .yaml/.yml
        #[arg(short, long)]
        output: String,
        /// Also write the ordered task list as task YAML
        #[arg(long)]
        export_tasks: Option<String>,
        /// Schedule start date (YYYY-MM-DD)
        #[arg(short, long, default_value_t = default_start_date())]
        start_date: String,
        /// Use the built-in five-task sample network
        #[arg(long, conflicts_with = "input")]
        sample: bool,
    },
    /// Earned value metrics for the stored project state
    Evm {
        #[command(subcommand)]
        action: EvmAction,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum EvmAction {
    /// Print metrics for the stored EVM inputs
    Show,
    /// Store new EVM inputs and print the resulting metrics
    Update(EvmValues),
}

#[derive(Args)]
pub struct EvmValues {
    /// Budget at completion
    #[arg(long)]
    pub bac: f64,
    /// Planned value
    #[arg(long)]
    pub pv: f64,
    /// Earned value
    #[arg(long)]
    pub ev: f64,
    /// Actual cost
    #[arg(long)]
    pub ac: f64,
}

fn default_start_date() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_defaults_start_date_to_today() {
        let args = CliArgs::parse_from(["estimates", "schedule", "-i", "tasks.yaml", "-o", "out.md"]);

        if let Commands::Schedule { start_date, sample, export_tasks, .. } = args.command {
            assert_eq!(start_date, default_start_date());
            assert!(!sample);
            assert!(export_tasks.is_none());
        } else {
            panic!("expected schedule command");
        }
    }

    #[test]
    fn schedule_requires_input_or_sample() {
        assert!(CliArgs::try_parse_from(["estimates", "schedule", "-o", "out.md"]).is_err());
        assert!(
            CliArgs::try_parse_from(["estimates", "schedule", "--sample", "-o", "out.md"]).is_ok()
        );
    }

    #[test]
    fn models_parses_complexity_and_global_flags() {
        let args = CliArgs::parse_from([
            "estimates", "models", "-s", "25", "-t", "5", "-m", "6", "-c", "high", "-v",
        ]);

        assert!(args.verbose);
        assert!(args.config.is_none());
        if let Commands::Models { project_size, complexity, output, .. } = args.command {
            assert_eq!(project_size, 25.0);
            assert_eq!(complexity, Complexity::High);
            assert!(output.is_none());
        } else {
            panic!("expected models command");
        }
    }

    #[test]
    fn evm_update_takes_all_four_values() {
        let args = CliArgs::parse_from([
            "estimates", "evm", "update", "--bac", "100", "--pv", "50", "--ev", "40", "--ac", "45",
        ]);

        match args.command {
            Commands::Evm { action: EvmAction::Update(values) } => {
                assert_eq!(values.bac, 100.0);
                assert_eq!(values.ac, 45.0);
            }
            _ => panic!("expected evm update command"),
        }
        assert!(CliArgs::try_parse_from(["estimates", "evm", "update", "--bac", "100"]).is_err());
    }
}
