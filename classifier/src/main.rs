mod config;
mod inference;
mod loader;
mod report;

use std::{env, path::PathBuf};

use anyhow::{Result, bail};
use catvnoncat_ml::{HyperParams, model};
use log::info;

use crate::{config::ClassifierConfig, report::Report};

const DEFAULT_CONFIG: &str = "classifier.json";

fn config_path() -> PathBuf {
    env::args()
        .nth(1)
        .or_else(|| env::var("CLASSIFIER_CONFIG").ok())
        .unwrap_or_else(|| DEFAULT_CONFIG.to_string())
        .into()
}

fn main() -> Result<()> {
    env_logger::init();

    let config = ClassifierConfig::load(&config_path())?;
    let classes = &config.dataset.classes;

    info!("loading dataset");
    let train_raw = loader::load_split(&config.dataset.train_dir, classes)?;
    let test_raw = loader::load_split(&config.dataset.test_dir, classes)?;

    let num_px = train_raw.num_px();
    if test_raw.num_px() != num_px {
        bail!(
            "train images are {num_px}x{num_px} but test images are {0}x{0}",
            test_raw.num_px()
        );
    }

    info!("number of training examples: m_train = {}", train_raw.len());
    info!("number of testing examples: m_test = {}", test_raw.len());
    info!("height/width of each image: num_px = {num_px}");
    info!("train_set_x shape: {:?}", train_raw.images.dim());
    info!("train_set_y shape: {:?}", train_raw.labels.dim());
    info!("test_set_x shape: {:?}", test_raw.images.dim());
    info!("test_set_y shape: {:?}", test_raw.labels.dim());

    let train = train_raw.to_labeled()?;
    let test = test_raw.to_labeled()?;

    info!("train_set_x flattened shape: {:?}", train.x().dim());
    info!("test_set_x flattened shape: {:?}", test.x().dim());
    let sanity: Vec<f32> = train.x().column(0).iter().take(5).copied().collect();
    info!("sanity check after reshaping: {sanity:?}");

    info!("training");
    let hyper = HyperParams::from(config.training);
    let trained = model(&train, &test, &hyper)?;

    info!("train accuracy: {} %", trained.train_accuracy);
    info!("test accuracy: {} %", trained.test_accuracy);
    report::log_learning_curve(&trained);

    let verdict = match &config.image {
        Some(path) => {
            let verdict = inference::classify(path, &trained.params, num_px, classes)?;
            info!(
                "y = {}, your algorithm predicts a \"{}\" picture.",
                verdict.label, verdict.class
            );
            Some(verdict)
        }
        None => None,
    };

    if let Some(path) = &config.report {
        Report::new(&trained, verdict).write(path)?;
        info!("report written to {}", path.display());
    }

    Ok(())
}
