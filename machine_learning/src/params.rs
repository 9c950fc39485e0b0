use ndarray::{Array2, ArrayView2, ArrayViewMut2};

use crate::{MlErr, Result};

/// The weights and bias of a logistic regression.
///
/// `w` is always a column vector, `(features, 1)`, and its shape never changes after construction:
/// the only mutable access goes through views.
#[derive(Debug, Clone, PartialEq)]
pub struct Params {
    w: Array2<f32>,
    b: f32,
}

impl Params {
    /// Creates a new `Params`.
    ///
    /// # Arguments
    /// * `w` - The weights, shaped `(features, 1)` with at least one feature.
    /// * `b` - The bias.
    ///
    /// # Returns
    /// A new `Params` instance or an error if `w` is not a non-empty column vector.
    pub fn new(w: Array2<f32>, b: f32) -> Result<Self> {
        if w.ncols() != 1 {
            return Err(MlErr::SizeMismatch {
                a: "w columns",
                b: "a column vector",
                got: w.ncols(),
                expected: 1,
            });
        }

        if w.nrows() == 0 {
            return Err(MlErr::InvalidDimension { what: "w" });
        }

        Ok(Self { w, b })
    }

    /// The amount of features these parameters weigh.
    pub fn dim(&self) -> usize {
        self.w.nrows()
    }

    pub fn w(&self) -> ArrayView2<'_, f32> {
        self.w.view()
    }

    pub fn b(&self) -> f32 {
        self.b
    }

    /// Mutable access for the update rule.
    pub(crate) fn parts_mut(&mut self) -> (ArrayViewMut2<'_, f32>, &mut f32) {
        (self.w.view_mut(), &mut self.b)
    }

    pub fn into_parts(self) -> (Array2<f32>, f32) {
        (self.w, self.b)
    }
}

/// Creates the initial parameters: a `(dim, 1)` vector of zeros and a zero bias.
///
/// # Errors
/// `MlErr::InvalidDimension` if `dim` is zero.
pub fn initialize(dim: usize) -> Result<Params> {
    if dim == 0 {
        return Err(MlErr::InvalidDimension { what: "the feature space" });
    }

    Params::new(Array2::zeros((dim, 1)), 0.)
}
