pub mod idx;
pub mod labeled_image;

pub use idx::{parse_idx_pair, read_idx_pair, DecodeError, CLASS_COUNT};
pub use labeled_image::LabeledImage;
