/// The knobs of a training run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HyperParams {
    /// How many gradient descent steps to take, always all of them.
    pub num_iterations: usize,
    /// The step length. Not validated here: a non-positive or NaN value just makes the
    /// parameters diverge.
    pub learning_rate: f32,
    /// Whether to log the cost every time it is sampled.
    pub print_cost: bool,
}

impl HyperParams {
    pub fn new(num_iterations: usize, learning_rate: f32, print_cost: bool) -> Self {
        Self {
            num_iterations,
            learning_rate,
            print_cost,
        }
    }
}

impl Default for HyperParams {
    fn default() -> Self {
        Self::new(2000, 0.005, true)
    }
}
