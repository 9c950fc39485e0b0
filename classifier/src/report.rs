use std::{fs, path::Path};

use anyhow::{Context, Result};
use catvnoncat_ml::ModelReport;
use log::info;
use serde::Serialize;

use crate::inference::Verdict;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostPoint {
    pub iteration: usize,
    pub cost: f32,
}

/// The outcome of a run as written to disk, for plotting. The trained parameters are left out.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub learning_rate: f32,
    pub num_iterations: usize,
    pub train_accuracy: f32,
    pub test_accuracy: f32,
    pub costs: Vec<CostPoint>,
    pub train_predictions: Vec<f32>,
    pub test_predictions: Vec<f32>,
    pub verdict: Option<Verdict>,
}

impl Report {
    pub fn new(model: &ModelReport, verdict: Option<Verdict>) -> Self {
        let costs = model
            .costs
            .points()
            .map(|(iteration, cost)| CostPoint { iteration, cost })
            .collect();

        Self {
            learning_rate: model.learning_rate,
            num_iterations: model.num_iterations,
            train_accuracy: model.train_accuracy,
            test_accuracy: model.test_accuracy,
            costs,
            train_predictions: model.train_predictions.iter().copied().collect(),
            test_predictions: model.test_predictions.iter().copied().collect(),
            verdict,
        }
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).with_context(|| format!("cannot write report '{}'", path.display()))
    }
}

/// Logs the sampled costs, one line per hundred iterations.
pub fn log_learning_curve(model: &ModelReport) {
    info!("learning rate = {}", model.learning_rate);
    info!("iteration | cost");

    for (iteration, cost) in model.costs.points() {
        info!("{iteration:>9} | {cost:.6}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catvnoncat_ml::{HyperParams, LabeledSet, model};
    use ndarray::array;

    fn trained() -> ModelReport {
        let set = LabeledSet::new(
            array![[1., -1., 2., -2.], [1., -2., 0.5, -0.5]],
            array![[1., 0., 1., 0.]],
        )
        .unwrap();

        model(&set, &set, &HyperParams::new(250, 0.1, false)).unwrap()
    }

    #[test]
    fn carries_costs_and_predictions() {
        let model = trained();
        let report = Report::new(&model, None);

        let iterations: Vec<_> = report.costs.iter().map(|p| p.iteration).collect();
        assert_eq!(iterations, vec![0, 100, 200]);
        assert_eq!(report.train_predictions, vec![1., 0., 1., 0.]);
        assert_eq!(report.num_iterations, 250);
        assert_eq!(report.train_accuracy, 100.);
    }

    #[test]
    fn serializes_without_parameters() {
        let verdict = Verdict {
            image: "images/cat.jpg".into(),
            label: 1,
            class: "cat".into(),
        };
        let report = Report::new(&trained(), Some(verdict));

        let json: serde_json::Value = serde_json::to_value(&report).unwrap();

        assert_eq!(json["costs"].as_array().unwrap().len(), 3);
        assert_eq!(json["costs"][1]["iteration"], 100);
        assert_eq!(json["verdict"]["class"], "cat");
        assert!(json.get("params").is_none());
        assert!(json.get("w").is_none());
    }
}
