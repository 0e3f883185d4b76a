pub mod evm;
pub mod evm_store;
pub mod feature_aggregation;
pub mod feature_models;
pub mod feature_yaml;
pub mod gantt_diagram;
pub mod network_diagram;
pub mod pert_network;
pub mod pert_yaml;
pub mod project_models;
pub mod rounding;
pub mod settings_yaml;
