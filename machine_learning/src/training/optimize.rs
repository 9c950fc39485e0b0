use log::{debug, info};
use ndarray::ArrayView2;

use super::{COST_SAMPLING_INTERVAL, CostHistory, HyperParams};
use crate::{
    Result,
    optimization::{GradientDescent, Optimizer},
    params::Params,
    propagation::{self, Gradients, Propagation, propagate},
};

/// The outcome of `optimize`.
#[derive(Debug, Clone, PartialEq)]
pub struct Optimized {
    /// The parameters after the last step.
    pub params: Params,
    /// The gradient computed on the last iteration, `None` if no iteration ran.
    pub grads: Option<Gradients>,
    pub costs: CostHistory,
}

/// Runs gradient descent over the whole batch for exactly `hyper.num_iterations` steps.
///
/// Every `COST_SAMPLING_INTERVAL` iterations (starting at 0) the cost computed on that iteration,
/// before its update, is appended to the history, and logged if `hyper.print_cost` is set.
/// There's no early stopping.
///
/// # Arguments
/// * `params` - The starting parameters, taken by value and handed back updated.
/// * `x` - The examples, `(features, m)`.
/// * `y` - The labels, `(1, m)`.
/// * `hyper` - The number of iterations, learning rate and verbosity.
///
/// # Errors
/// A `SizeMismatch` or `EmptySet` error if the shapes don't line up, before any step is taken.
pub fn optimize(
    mut params: Params,
    x: ArrayView2<f32>,
    y: ArrayView2<f32>,
    hyper: &HyperParams,
) -> Result<Optimized> {
    propagation::check_weights(params.w(), x)?;
    propagation::check_labels(x, y)?;

    let mut optimizer = GradientDescent::new(hyper.learning_rate);
    let mut costs = CostHistory::new();
    let mut grads = None;

    debug!(
        iterations = hyper.num_iterations,
        learning_rate = hyper.learning_rate,
        examples = x.ncols();
        "starting gradient descent"
    );

    for i in 0..hyper.num_iterations {
        let Propagation { cost, grads: step } = propagate(params.w(), params.b(), x, y)?;
        optimizer.update_params(&mut params, &step);

        if i % COST_SAMPLING_INTERVAL == 0 {
            costs.record(cost);

            if hyper.print_cost {
                info!("cost after iteration {i}: {cost}");
            }
        }

        grads = Some(step);
    }

    debug!(samples = costs.len(); "gradient descent finished");

    Ok(Optimized {
        params,
        grads,
        costs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MlErr, params::initialize};
    use ndarray::{Array2, array};

    #[test]
    fn reference_run() {
        let params = Params::new(array![[1.], [2.]], 2.).unwrap();
        let x = array![[1., 2., -1.], [3., 4., -3.2]];
        let y = array![[1., 0., 1.]];
        let hyper = HyperParams::new(100, 0.009, false);

        let Optimized {
            params,
            grads,
            costs,
        } = optimize(params, x.view(), y.view(), &hyper).unwrap();

        let close = |a: f32, b: f32| (a - b).abs() < 1e-4;
        let w = params.w();
        assert!(close(w[[0, 0]], 0.190_335_91), "{w:?}");
        assert!(close(w[[1, 0]], 0.122_591_59), "{w:?}");
        assert!(close(params.b(), 1.925_359_83), "{}", params.b());

        let grads = grads.unwrap();
        assert!(close(grads.dw[[0, 0]], 0.677_520_42), "{:?}", grads.dw);
        assert!(close(grads.dw[[1, 0]], 1.416_254_95), "{:?}", grads.dw);
        assert!(close(grads.db, 0.219_194_5), "{}", grads.db);

        assert_eq!(costs.len(), 1);
    }

    #[test]
    fn samples_every_hundred_iterations() {
        let params = initialize(2).unwrap();
        let x = array![[1., 2., -1.], [3., 4., -3.2]];
        let y = array![[1., 0., 1.]];

        for (iters, samples) in [(0, 0), (1, 1), (100, 1), (101, 2), (250, 3)] {
            let hyper = HyperParams::new(iters, 0.01, false);
            let out = optimize(params.clone(), x.view(), y.view(), &hyper).unwrap();

            assert_eq!(out.costs.len(), samples, "{iters} iterations");
        }
    }

    #[test]
    fn zero_iterations_returns_the_input() {
        let params = Params::new(array![[0.5], [-0.5]], 0.25).unwrap();
        let x = array![[1., 2.], [3., 4.]];
        let y = array![[1., 0.]];

        let out = optimize(params.clone(), x.view(), y.view(), &HyperParams::new(0, 0.1, false))
            .unwrap();

        assert_eq!(out.params, params);
        assert!(out.grads.is_none());
        assert!(out.costs.is_empty());
    }

    #[test]
    fn cost_decreases_on_separable_data() {
        // Three points split by the line x0 + x1 = 0.
        let x = array![[1., -1., 2.], [1., -2., 0.5]];
        let y = array![[1., 0., 1.]];
        let hyper = HyperParams::new(1000, 0.01, false);

        let out = optimize(initialize(2).unwrap(), x.view(), y.view(), &hyper).unwrap();

        let first = out.costs.first().unwrap();
        let last = out.costs.last().unwrap();
        assert_eq!(out.costs.len(), 10);
        assert!(last < first, "{first} -> {last}");
        out.costs
            .costs()
            .windows(2)
            .for_each(|pair| assert!(pair[1] < pair[0], "{pair:?}"));
    }

    #[test]
    fn shape_errors_surface_before_training() {
        let x = Array2::zeros((3, 4));
        let y = Array2::zeros((1, 4));
        let hyper = HyperParams::new(0, 0.1, false);

        let err = optimize(initialize(2).unwrap(), x.view(), y.view(), &hyper).unwrap_err();
        assert!(matches!(err, MlErr::SizeMismatch { .. }));
    }
}
