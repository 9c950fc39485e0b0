use ndarray::{Array2, ArrayView2};

use crate::{MlErr, Result, arch::activations::sigmoid_array, params::Params};

/// Activations strictly above this value are classified as the positive class.
pub const DECISION_THRESHOLD: f32 = 0.5;

/// Classifies every column of `x` as `0` or `1` using the given weights and bias.
///
/// # Arguments
/// * `w` - The weights, reshaped to `(features, 1)`, so any layout with `features` entries works.
/// * `b` - The bias.
/// * `x` - The examples, `(features, m)`.
///
/// # Returns
/// A freshly allocated `(1, m)` array where an example is `1` only if its activation is greater
/// than `DECISION_THRESHOLD` (exactly one half maps to `0`).
pub fn predict(w: ArrayView2<f32>, b: f32, x: ArrayView2<f32>) -> Result<Array2<f32>> {
    if w.len() != x.nrows() {
        return Err(MlErr::SizeMismatch {
            a: "w",
            b: "X features",
            got: w.len(),
            expected: x.nrows(),
        });
    }

    let w = w.to_shape((x.nrows(), 1))?;
    let a = sigmoid_array(w.t().dot(&x) + b);

    Ok(a.mapv_into(|a| if a > DECISION_THRESHOLD { 1. } else { 0. }))
}

impl Params {
    /// Shorthand for `predict` with these parameters.
    pub fn predict(&self, x: ArrayView2<f32>) -> Result<Array2<f32>> {
        predict(self.w(), self.b(), x)
    }
}
