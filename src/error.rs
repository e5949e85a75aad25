//! Error types for ferrite-mnist

use std::path::PathBuf;

use thiserror::Error;

use crate::data::idx::DecodeError;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can abort a run.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed configuration (e.g. a target policy of the wrong length).
    /// Raised before any file is touched.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A dataset split could not be read or failed format validation.
    #[error("Dataset '{split}' unavailable: {source}")]
    DataUnavailable {
        split: &'static str,
        #[source]
        source: DecodeError,
    },

    /// The model file exists but neither codec could read it.
    #[error("Couldn't load model {path}: compressed: {compressed}; uncompressed: {uncompressed}")]
    ModelLoad {
        path: PathBuf,
        compressed: String,
        uncompressed: String,
    },

    /// The trained model could not be written back. Only ever logged by `run`.
    #[error("Couldn't save model {path}: {source}")]
    ModelSave {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Engine-side failure, e.g. a loaded model that does not fit the data.
    #[error("Engine error: {0}")]
    Engine(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file (de)serialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
