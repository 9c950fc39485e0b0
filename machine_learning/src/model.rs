use log::debug;
use ndarray::Array2;

use crate::{
    MlErr, Result,
    dataset::LabeledSet,
    metrics::accuracy,
    params::{Params, initialize},
    training::{CostHistory, HyperParams, Optimized, optimize},
};

/// Everything a training run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelReport {
    pub costs: CostHistory,
    pub train_predictions: Array2<f32>,
    pub test_predictions: Array2<f32>,
    pub params: Params,
    pub learning_rate: f32,
    pub num_iterations: usize,
    pub train_accuracy: f32,
    pub test_accuracy: f32,
}

/// Trains a logistic regression on `train` and evaluates it on both sets.
///
/// The parameters start at zero, are fitted with `optimize` and then used to predict every
/// example of both sets. Nothing is printed or written, besides logging.
///
/// # Errors
/// `SizeMismatch` if both sets don't have the same number of features, checked before training.
pub fn model(train: &LabeledSet, test: &LabeledSet, hyper: &HyperParams) -> Result<ModelReport> {
    if test.features() != train.features() {
        return Err(MlErr::SizeMismatch {
            a: "test features",
            b: "train features",
            got: test.features(),
            expected: train.features(),
        });
    }

    let params = initialize(train.features())?;
    debug!("w.shape() = {:?}, b = {}", params.w().dim(), params.b());

    let Optimized { params, costs, .. } = optimize(params, train.x(), train.y(), hyper)?;

    let test_predictions = params.predict(test.x())?;
    let train_predictions = params.predict(train.x())?;

    let train_accuracy = accuracy(train_predictions.view(), train.y())?;
    let test_accuracy = accuracy(test_predictions.view(), test.y())?;

    Ok(ModelReport {
        costs,
        train_predictions,
        test_predictions,
        params,
        learning_rate: hyper.learning_rate,
        num_iterations: hyper.num_iterations,
        train_accuracy,
        test_accuracy,
    })
}
