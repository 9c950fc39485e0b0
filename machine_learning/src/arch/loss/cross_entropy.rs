use ndarray::{Array2, ArrayView2};

use super::LossFn;

/// Negative log-likelihood of a sigmoid output against labels in `{0, 1}`.
///
/// The loss is evaluated on the scores instead of the activations, using
/// `-log(sigmoid(z)) = softplus(-z)` and `-log(1 - sigmoid(z)) = softplus(z)`, so it stays finite
/// when the activation rounds to exactly `0` or `1`.
#[derive(Default, Clone, Copy, Debug)]
pub struct BinaryCrossEntropy;

impl BinaryCrossEntropy {
    /// Returns a new `BinaryCrossEntropy`.
    pub fn new() -> Self {
        Self
    }
}

/// `ln(1 + e^t)` without overflowing for large `t`.
fn softplus(t: f32) -> f32 {
    t.max(0.) + (-t.abs()).exp().ln_1p()
}

impl LossFn for BinaryCrossEntropy {
    fn loss(&self, z: ArrayView2<f32>, y: ArrayView2<f32>) -> f32 {
        let m = z.len() as f32;
        let total: f32 = z
            .iter()
            .zip(y.iter())
            .map(|(&z, &y)| y * softplus(-z) + (1. - y) * softplus(z))
            .sum();

        total / m
    }

    fn delta(&self, a: ArrayView2<f32>, y: ArrayView2<f32>) -> Array2<f32> {
        &a - &y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arch::activations::sigmoid;
    use ndarray::array;

    #[test]
    fn matches_the_log_likelihood_formula() {
        let z = array![[0.3f32, -1.2, 2.5, -0.1]];
        let y = array![[1f32, 0., 0., 1.]];

        let expected = z
            .iter()
            .zip(y.iter())
            .map(|(&z, &y)| {
                let a = sigmoid(z);
                -(y * a.ln() + (1. - y) * (1. - a).ln())
            })
            .sum::<f32>()
            / 4.;

        let loss = BinaryCrossEntropy.loss(z.view(), y.view());
        assert!((loss - expected).abs() < 1e-5, "{loss} != {expected}");
    }

    #[test]
    fn stays_finite_when_the_activation_saturates() {
        let z = array![[200f32, -200.]];
        let y = array![[0f32, 1.]];

        let loss = BinaryCrossEntropy.loss(z.view(), y.view());
        assert!(loss.is_finite());
        assert!((loss - 200.).abs() < 1e-3);
    }

    #[test]
    fn confident_and_right_costs_almost_nothing() {
        let z = array![[30f32, -30.]];
        let y = array![[1f32, 0.]];

        assert!(BinaryCrossEntropy.loss(z.view(), y.view()) < 1e-6);
    }

    #[test]
    fn delta_is_activation_minus_label() {
        let a = array![[0.9f32, 0.2]];
        let y = array![[1f32, 0.]];

        let d = BinaryCrossEntropy.delta(a.view(), y.view());
        assert!((d[[0, 0]] + 0.1).abs() < 1e-6);
        assert!((d[[0, 1]] - 0.2).abs() < 1e-6);
    }
}
