use ndarray::{Array, Dimension};

/// The logistic function `1 / (1 + e^-z)`.
///
/// Not clamped: in `f32` it saturates to exactly `0.0` or `1.0` once `|z|` is large enough, but it
/// never yields NaN for a finite `z`.
pub fn sigmoid(z: f32) -> f32 {
    1. / (1. + (-z).exp())
}

/// Applies `sigmoid` elementwise, reusing the buffer of `z`.
///
/// # Arguments
/// * `z` - The array of scores.
///
/// # Returns
/// An array of the same shape with every entry in `[0, 1]`.
pub fn sigmoid_array<D: Dimension>(z: Array<f32, D>) -> Array<f32, D> {
    z.mapv_into(sigmoid)
}
