use serde::{Deserialize, Serialize};

/// Statistics for one training step (`epochs` consecutive epochs).
///
/// Returned by `Engine::train`; the orchestrator logs it and, when a
/// progress channel is configured in `RunOptions`, forwards it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepStats {
    /// Epochs this model has been trained for, including earlier runs.
    pub epochs_completed: usize,
    /// Mean training error over the last epoch of the step.
    pub train_error: f64,
    /// Mean error over the test set after the step; `None` for an empty test set.
    pub test_error: Option<f64>,
    /// Wall-clock duration of the step in milliseconds.
    pub elapsed_ms: u64,
}
