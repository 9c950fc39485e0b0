pub mod arch;
pub mod dataset;
pub mod error;
pub mod metrics;
pub mod model;
pub mod optimization;
pub mod params;
pub mod prediction;
pub mod propagation;
pub mod training;

pub use dataset::{LabeledSet, flatten_images};
pub use error::{MlErr, Result};
pub use metrics::accuracy;
pub use model::{ModelReport, model};
pub use params::{Params, initialize};
pub use prediction::predict;
pub use propagation::{Gradients, Propagation, propagate};
pub use training::{CostHistory, HyperParams, Optimized, optimize};
