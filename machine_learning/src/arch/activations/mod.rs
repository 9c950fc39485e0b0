mod sigmoid;

pub use sigmoid::{sigmoid, sigmoid_array};
