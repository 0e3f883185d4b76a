pub mod estimate;
pub mod evm;
pub mod feature;
pub mod pert_task;
pub mod project;
