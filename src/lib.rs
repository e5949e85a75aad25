pub mod error;
pub mod config;
pub mod data;
pub mod pattern;
pub mod eval;
pub mod engine;
pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use error::{Error, Result};
pub use config::{DataPaths, RunConfig};
pub use data::{read_idx_pair, DecodeError, LabeledImage};
pub use pattern::{build_pattern_set, encode_pattern, Pattern, PatternSet, TargetPolicy};
pub use eval::{is_successful, RunResult};
pub use engine::{Codec, Engine, StepStats, Topology};
pub use network::Network;
pub use train::{run, run_network, RunOptions};
