use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use catvnoncat_ml::HyperParams;
use serde::{Deserialize, Serialize};

/// Where the labeled images live and what their labels mean.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    pub train_dir: PathBuf,
    pub test_dir: PathBuf,
    /// Class names indexed by label, also the names of the folders holding each class' images.
    #[serde(default = "default_classes")]
    pub classes: Vec<String>,
}

fn default_classes() -> Vec<String> {
    vec!["non-cat".to_string(), "cat".to_string()]
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    pub num_iterations: usize,
    pub learning_rate: f32,
    pub print_cost: bool,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        let HyperParams {
            num_iterations,
            learning_rate,
            print_cost,
        } = HyperParams::default();

        Self {
            num_iterations,
            learning_rate,
            print_cost,
        }
    }
}

impl From<TrainingConfig> for HyperParams {
    fn from(value: TrainingConfig) -> Self {
        HyperParams::new(value.num_iterations, value.learning_rate, value.print_cost)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub training: TrainingConfig,
    /// An extra picture to classify once the model is trained.
    #[serde(default)]
    pub image: Option<PathBuf>,
    /// Where to write the JSON report, if anywhere.
    #[serde(default)]
    pub report: Option<PathBuf>,
}

impl ClassifierConfig {
    /// Reads and validates a config from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("cannot read config '{}'", path.display()))?;

        Self::from_json(&content).with_context(|| format!("invalid config '{}'", path.display()))
    }

    /// Parses and validates a config from a JSON string.
    pub fn from_json(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content).context("invalid JSON")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let lr = self.training.learning_rate;
        if !lr.is_finite() || lr <= 0. {
            bail!("learning_rate must be a positive number, got {lr}");
        }

        if self.dataset.classes.len() != 2 {
            bail!(
                "exactly two classes are needed, got {}",
                self.dataset.classes.len()
            );
        }

        if self.dataset.classes[0] == self.dataset.classes[1] {
            bail!("class names must be distinct");
        }

        Ok(())
    }
}
