//! The seam between the run orchestration and the network that does the
//! actual learning.
//!
//! `train::run` is generic over [`Engine`]; the crate's own implementation is
//! [`crate::network::Network`], and tests drive the orchestrator with fakes.

pub mod codec;
pub mod step_stats;
pub mod topology;

use std::io;
use std::path::Path;

use crate::pattern::PatternSet;

pub use codec::Codec;
pub use step_stats::StepStats;
pub use topology::Topology;

pub trait Engine: Sized {
    /// Builds an untrained model with engine-default initialisation.
    fn create(topology: &Topology) -> Self;

    /// Reads a model persisted with `save` using the same codec.
    fn load(path: &Path, codec: Codec) -> io::Result<Self>;

    fn save(&self, path: &Path, codec: Codec) -> io::Result<()>;

    /// Number of inputs the model expects per pattern.
    fn input_size(&self) -> usize;

    /// Number of output activations per pattern.
    fn output_size(&self) -> usize;

    /// Advances training by exactly `epochs` epochs over `train`, updating
    /// weights in place. `test` is only used for the reported test error.
    fn train(&mut self, train: &PatternSet, test: &PatternSet, epochs: usize) -> StepStats;

    /// Runs one pattern forward and returns its error. The resulting
    /// activations are readable through `outputs` until the next call.
    fn test(&mut self, inputs: &[f64], targets: &[f64]) -> f64;

    /// Output-layer activations from the most recent forward pass.
    fn outputs(&self) -> &[f64];
}
