use ndarray::{Array2, ArrayView2};

use crate::{
    MlErr, Result,
    arch::{
        activations::sigmoid_array,
        loss::{BinaryCrossEntropy, LossFn},
    },
};

/// The gradient of the cost with respect to the parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradients {
    /// Same shape as the weights, `(features, 1)`.
    pub dw: Array2<f32>,
    pub db: f32,
}

/// The outcome of a forward and backward pass over a labeled batch.
#[derive(Debug, Clone, PartialEq)]
pub struct Propagation {
    pub cost: f32,
    pub grads: Gradients,
}

/// Checks that `w` is a `(features, 1)` column matching the rows of `x`.
pub(crate) fn check_weights(w: ArrayView2<f32>, x: ArrayView2<f32>) -> Result<()> {
    if w.ncols() != 1 {
        return Err(MlErr::SizeMismatch {
            a: "w columns",
            b: "a column vector",
            got: w.ncols(),
            expected: 1,
        });
    }

    if w.nrows() != x.nrows() {
        return Err(MlErr::SizeMismatch {
            a: "w",
            b: "X features",
            got: w.nrows(),
            expected: x.nrows(),
        });
    }

    Ok(())
}

/// Checks that `y` is a `(1, m)` row matching the `m` columns of `x`, with `m > 0`.
pub(crate) fn check_labels(x: ArrayView2<f32>, y: ArrayView2<f32>) -> Result<()> {
    if y.nrows() != 1 {
        return Err(MlErr::SizeMismatch {
            a: "Y rows",
            b: "a row vector",
            got: y.nrows(),
            expected: 1,
        });
    }

    if y.ncols() != x.ncols() {
        return Err(MlErr::SizeMismatch {
            a: "Y",
            b: "X examples",
            got: y.ncols(),
            expected: x.ncols(),
        });
    }

    if x.ncols() == 0 {
        return Err(MlErr::EmptySet { what: "batch" });
    }

    Ok(())
}

/// Makes a forward and a backward pass of the logistic regression over a batch.
///
/// # Arguments
/// * `w` - The weights, `(features, 1)`.
/// * `b` - The bias, broadcast over every example.
/// * `x` - The examples, one per column, `(features, m)`.
/// * `y` - The labels, `(1, m)`, each either `0` or `1`.
///
/// # Returns
/// The average negative log-likelihood and its gradient with respect to `w` and `b`, or a
/// `SizeMismatch`/`EmptySet` error if the shapes don't line up. Nothing is mutated.
pub fn propagate(
    w: ArrayView2<f32>,
    b: f32,
    x: ArrayView2<f32>,
    y: ArrayView2<f32>,
) -> Result<Propagation> {
    check_weights(w, x)?;
    check_labels(x, y)?;

    let loss_fn = BinaryCrossEntropy::new();
    let m = x.ncols() as f32;

    // (1, m)
    let z = w.t().dot(&x) + b;
    let cost = loss_fn.loss(z.view(), y);
    let a = sigmoid_array(z);

    let d = loss_fn.delta(a.view(), y);
    let dw = x.dot(&d.t()) / m;
    let db = d.sum() / m;

    Ok(Propagation {
        cost,
        grads: Gradients { dw, db },
    })
}
