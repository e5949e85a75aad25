use std::sync::mpsc;
use std::sync::{Arc, atomic::AtomicBool};

use crate::engine::StepStats;

/// Optional hooks for a `run`, kept apart from `RunConfig` because they are
/// not serializable.
///
/// # Fields
/// - `progress_tx` — one `StepStats` is sent after every training step.  A
///                   dropped receiver is ignored; training continues.
/// - `stop_flag`   — checked before each step; once `true` the remaining
///                   steps are skipped and the run proceeds to testing and
///                   saving with the model trained so far.
#[derive(Debug, Default)]
pub struct RunOptions {
    pub progress_tx: Option<mpsc::Sender<StepStats>>,
    pub stop_flag: Option<Arc<AtomicBool>>,
}

impl RunOptions {
    /// No progress channel and no stop flag.
    pub fn new() -> Self {
        RunOptions::default()
    }

    pub fn with_progress(mut self, tx: mpsc::Sender<StepStats>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    pub fn with_stop_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.stop_flag = Some(flag);
        self
    }
}
