use super::Optimizer;
use crate::{params::Params, propagation::Gradients};

/// Gradient descent optimization algorithm.
#[derive(Debug, Clone, Copy)]
pub struct GradientDescent {
    learning_rate: f32,
}

impl GradientDescent {
    /// Returns a new `GradientDescent`.
    ///
    /// # Arguments
    /// * `learning_rate` - The *length* of the steps taken on `update_params`.
    pub fn new(learning_rate: f32) -> Self {
        Self { learning_rate }
    }
}

impl Optimizer for GradientDescent {
    /// Updates the parameters according to the algorithm's learning rule, that is, making a step in
    /// the opposite direction of the gradient, with a length of `learning_rate`.
    ///
    /// # Arguments
    /// * `params` - The parameters that are going to be modified.
    /// * `grads` - The gradient used for taking the step, shaped like `params`.
    fn update_params(&mut self, params: &mut Params, grads: &Gradients) {
        let lr = self.learning_rate;
        let (mut w, b) = params.parts_mut();

        w.scaled_add(-lr, &grads.dw);
        *b -= lr * grads.db;
    }
}
