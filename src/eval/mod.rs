pub mod judge;
pub mod report;
pub mod run_result;

pub use judge::{is_successful, TARGET_CLASS_EPSILON};
pub use report::format_input_grid;
pub use run_result::RunResult;
