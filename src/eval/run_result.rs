use std::fmt;

use serde::Serialize;

/// Number of per-pattern flags shown by `Display`.
pub const DEFAULT_PREVIEW: usize = 4;

/// Outcome of the judged test pass, one entry per test pattern.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunResult {
    pub per_pattern_error: Vec<f64>,
    pub per_pattern_success: Vec<bool>,
    /// `count(true) / len`, or `0.0` for an empty test set.
    pub success_rate: f64,
    /// `false` if writing the model back failed. The results are valid either way.
    pub model_saved: bool,
}

impl RunResult {
    pub fn new(per_pattern_error: Vec<f64>, per_pattern_success: Vec<bool>, model_saved: bool) -> RunResult {
        let success_rate = success_rate(&per_pattern_success);
        RunResult { per_pattern_error, per_pattern_success, success_rate, model_saved }
    }

    pub fn success_count(&self) -> usize {
        self.per_pattern_success.iter().filter(|&&ok| ok).count()
    }

    /// Human-readable summary listing the first `preview` success flags.
    pub fn summary(&self, preview: usize) -> String {
        let mut s = format!("SuccessRate = {}\nTests successful:\n", self.success_rate);
        for (i, ok) in self.per_pattern_success.iter().take(preview).enumerate() {
            s.push_str(&format!("pattern {}: {}\n", i, ok));
        }
        s
    }
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary(DEFAULT_PREVIEW))
    }
}

fn success_rate(flags: &[bool]) -> f64 {
    if flags.is_empty() {
        return 0.0;
    }
    flags.iter().filter(|&&ok| ok).count() as f64 / flags.len() as f64
}
