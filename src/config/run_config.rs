use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::data::CLASS_COUNT;
use crate::engine::Codec;
use crate::error::{Error, Result};
use crate::pattern::TargetPolicy;

/// Locations of the four MNIST IDX files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataPaths {
    pub train_images: PathBuf,
    pub train_labels: PathBuf,
    pub test_images: PathBuf,
    pub test_labels: PathBuf,
}

impl DataPaths {
    /// Standard MNIST file names under `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> DataPaths {
        let dir = dir.as_ref();
        DataPaths {
            train_images: dir.join("train-images.idx3-ubyte"),
            train_labels: dir.join("train-labels.idx1-ubyte"),
            test_images: dir.join("t10k-images.idx3-ubyte"),
            test_labels: dir.join("t10k-labels.idx1-ubyte"),
        }
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        DataPaths::in_dir("data")
    }
}

/// Everything one train-then-test run needs.
///
/// Missing fields in a JSON file fall back to `Default`, e.g.
///
/// ```json
/// {
///   "model_path": "mnist.json",
///   "class_targets": 1.0,
///   "non_class_targets": 0.0,
///   "steps": 3,
///   "epochs_per_step": 5
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Model to continue training; created if it does not exist.
    pub model_path: PathBuf,
    /// Codec used when saving. Loading always tries both.
    pub model_codec: Codec,
    pub data: DataPaths,
    pub class_targets: TargetPolicy,
    pub non_class_targets: TargetPolicy,
    pub steps: usize,
    pub epochs_per_step: usize,
    /// Only used when a new model is created.
    pub hidden_neurons: usize,
    /// Log every test pattern's inputs, targets, outputs and error.
    pub debug: bool,
    /// Number of per-pattern success flags in the printed summary.
    pub preview_patterns: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            model_path: PathBuf::from("mnist_784i_100h_10o.json"),
            model_codec: Codec::Compressed,
            data: DataPaths::default(),
            // Index i is digit i; odd digits use a lower class value.
            class_targets: TargetPolicy::PerClass(vec![1.0, 0.9, 1.0, 0.9, 1.0, 0.9, 1.0, 0.9, 1.0, 0.9]),
            non_class_targets: TargetPolicy::PerClass(vec![0.1, 0.0, 0.1, 0.0, 0.1, 0.0, 0.1, 0.0, 0.1, 0.0]),
            steps: 1,
            epochs_per_step: 2,
            hidden_neurons: 100,
            debug: false,
            preview_patterns: 4,
        }
    }
}

impl RunConfig {
    /// Checks everything that can be checked without touching the filesystem.
    pub fn validate(&self) -> Result<()> {
        self.class_targets.validate(CLASS_COUNT)?;
        self.non_class_targets.validate(CLASS_COUNT)?;
        if self.steps == 0 {
            return Err(Error::Config("steps must be at least 1".into()));
        }
        if self.epochs_per_step == 0 {
            return Err(Error::Config("epochs_per_step must be at least 1".into()));
        }
        if self.hidden_neurons == 0 {
            return Err(Error::Config("hidden_neurons must be at least 1".into()));
        }
        Ok(())
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a config from a JSON file. Does not validate.
    pub fn load_json(path: impl AsRef<Path>) -> Result<RunConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
