use ndarray::ArrayView2;

use crate::{MlErr, Result};

/// Percentage of predictions that match their labels, `100 - mean(|p - y|) * 100`.
///
/// # Errors
/// `SizeMismatch` if the shapes differ, `EmptySet` if there are no predictions.
pub fn accuracy(y_pred: ArrayView2<f32>, y: ArrayView2<f32>) -> Result<f32> {
    if y_pred.dim() != y.dim() {
        return Err(MlErr::SizeMismatch {
            a: "predictions",
            b: "labels",
            got: y_pred.len(),
            expected: y.len(),
        });
    }

    let error = (&y_pred - &y)
        .mapv(f32::abs)
        .mean()
        .ok_or(MlErr::EmptySet {
            what: "prediction set",
        })?;

    Ok(100. - error * 100.)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, array};

    #[test]
    fn all_right() {
        let y = array![[1., 0., 1., 1.]];
        assert_eq!(accuracy(y.view(), y.view()).unwrap(), 100.);
    }

    #[test]
    fn all_wrong() {
        let y = array![[1., 0., 1., 1.]];
        let y_pred = y.mapv(|y| 1. - y);

        assert_eq!(accuracy(y_pred.view(), y.view()).unwrap(), 0.);
    }

    #[test]
    fn half_right() {
        let y = array![[1., 0., 1., 0.]];
        let y_pred = array![[1., 1., 0., 0.]];

        assert_eq!(accuracy(y_pred.view(), y.view()).unwrap(), 50.);
    }

    #[test]
    fn shape_mismatch() {
        let y = Array2::zeros((1, 3));
        let y_pred = Array2::zeros((1, 4));

        assert!(matches!(
            accuracy(y_pred.view(), y.view()),
            Err(MlErr::SizeMismatch { .. })
        ));
    }

    #[test]
    fn empty() {
        let y = Array2::zeros((1, 0));
        assert!(matches!(
            accuracy(y.view(), y.view()),
            Err(MlErr::EmptySet { .. })
        ));
    }
}
