pub mod pattern;
pub mod pattern_set;
pub mod target_policy;

pub use pattern::{encode_pattern, Pattern};
pub use pattern_set::{build_pattern_set, PatternSet};
pub use target_policy::TargetPolicy;
