mod commands;
mod domain;
mod logging;
mod services;

use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::evm_cmd::evm_command;
use crate::commands::features_cmd::features_command;
use crate::commands::models_cmd::models_command;
use crate::commands::schedule_cmd::schedule_command;
use crate::services::settings_yaml::Settings;
use clap::{CommandFactory, Parser};

fn main() {
    let args = CliArgs::parse();
    logging::init(args.verbose);

    let settings = match Settings::load(args.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load settings: {e:?}");
            return;
        }
    };

    match args.command {
        cmd @ Commands::Models { .. } => models_command(cmd, &settings),
        cmd @ Commands::Features { .. } => features_command(cmd, &settings),
        cmd @ Commands::Schedule { .. } => schedule_command(cmd),
        cmd @ Commands::Evm { .. } => evm_command(cmd, &settings),
        Commands::Completions { shell } => {
            let mut command = CliArgs::command();
            let name = command.get_name().to_string();
            clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
        }
    }
}
