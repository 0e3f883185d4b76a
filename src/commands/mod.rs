pub mod base_commands;
pub mod evm_cmd;
pub mod features_cmd;
pub mod models_cmd;
pub mod report_format;
pub mod schedule_cmd;
