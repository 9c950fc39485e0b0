use ndarray::{Array2, ArrayView2, ArrayView4};

use crate::{MlErr, Result, propagation};

/// Flattens a stack of images into a feature matrix with one example per column.
///
/// Each `(h, w, c)` image becomes a column of `h * w * c` values in row-major order, scaled from
/// `0..=255` down to `[0, 1]`.
///
/// # Arguments
/// * `images` - The images, `(m, h, w, c)`.
///
/// # Returns
/// The `(h * w * c, m)` feature matrix.
pub fn flatten_images(images: ArrayView4<u8>) -> Result<Array2<f32>> {
    let (m, h, w, c) = images.dim();
    let flat = images.to_shape((m, h * w * c))?;

    Ok(flat.t().mapv(|p| f32::from(p) / 255.))
}

/// A feature matrix together with its labels.
///
/// Built only through `LabeledSet::new`, so every instance has a `(1, m)` label row of zeros and
/// ones matching the `m > 0` columns of the features.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledSet {
    x: Array2<f32>,
    y: Array2<f32>,
}

impl LabeledSet {
    /// Creates a new `LabeledSet`.
    ///
    /// # Arguments
    /// * `x` - The examples, `(features, m)`.
    /// * `y` - The labels, `(1, m)`.
    ///
    /// # Returns
    /// The set, or an error if the shapes don't line up or a label isn't `0` or `1`.
    pub fn new(x: Array2<f32>, y: Array2<f32>) -> Result<Self> {
        if x.nrows() == 0 {
            return Err(MlErr::InvalidDimension { what: "X" });
        }

        propagation::check_labels(x.view(), y.view())?;

        if let Some((index, &value)) = y.iter().enumerate().find(|&(_, &v)| v != 0. && v != 1.) {
            return Err(MlErr::NonBinaryLabel { index, value });
        }

        Ok(Self { x, y })
    }

    pub fn x(&self) -> ArrayView2<'_, f32> {
        self.x.view()
    }

    pub fn y(&self) -> ArrayView2<'_, f32> {
        self.y.view()
    }

    /// The number of features of each example.
    pub fn features(&self) -> usize {
        self.x.nrows()
    }

    /// The number of examples.
    pub fn len(&self) -> usize {
        self.x.ncols()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
