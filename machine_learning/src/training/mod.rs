mod cost_history;
mod hyper_params;
mod optimize;

pub use cost_history::{COST_SAMPLING_INTERVAL, CostHistory};
pub use hyper_params::HyperParams;
pub use optimize::{Optimized, optimize};
