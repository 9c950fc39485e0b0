use ndarray::{Array2, ArrayView2};

pub trait LossFn {
    /// The average loss over the examples, computed from the raw scores `z` (before activation).
    fn loss(&self, z: ArrayView2<f32>, y: ArrayView2<f32>) -> f32;

    /// The derivative of the per-example loss with respect to `z`, given the activations `a`.
    fn delta(&self, a: ArrayView2<f32>, y: ArrayView2<f32>) -> Array2<f32>;
}
