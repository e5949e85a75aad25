pub mod orchestrator;
pub mod run_options;

pub use orchestrator::{run, run_network};
pub use run_options::RunOptions;
