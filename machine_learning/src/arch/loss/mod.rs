mod cross_entropy;
mod loss_fn;

pub use cross_entropy::BinaryCrossEntropy;
pub use loss_fn::LossFn;
