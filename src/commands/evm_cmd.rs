use crate::commands::base_commands::{Commands, EvmAction};
use crate::commands::report_format::format_evm_report;
use crate::domain::evm::EvmData;
use crate::services::evm_store::{EvmState, FileStore};
use crate::services::settings_yaml::Settings;

pub fn evm_command(cmd: Commands, settings: &Settings) {
    if let Commands::Evm { action } = cmd {
        let store = FileStore::new(&settings.store_dir);
        let mut state = match EvmState::load(store) {
            Ok(state) => state,
            Err(e) => {
                eprintln!("Failed to load EVM data: {e:?}");
                return;
            }
        };

        let metrics = match action {
            EvmAction::Show => state.metrics(),
            EvmAction::Update(values) => {
                let data = EvmData {
                    bac: values.bac,
                    pv: values.pv,
                    ev: values.ev,
                    ac: values.ac,
                };
                match state.update(data) {
                    Ok(metrics) => metrics,
                    Err(e) => {
                        eprintln!("Failed to save EVM data: {e:?}");
                        return;
                    }
                }
            }
        };

        println!("{}", format_evm_report(&state.data(), &metrics));
    }
}
