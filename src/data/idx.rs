//! Decoder for the IDX binary pair (image file + label file) MNIST ships in.
//!
//! # IDX3 image file layout
//! ```text
//! bytes  0-3:   0x00000803  (magic: uint8 data, 3 dimensions)
//! bytes  4-7:   N           (number of images, big-endian u32)
//! bytes  8-11:  rows        (image height in pixels, big-endian u32)
//! bytes 12-15:  cols        (image width in pixels, big-endian u32)
//! bytes 16..:   N * rows * cols bytes, row-major, uint8
//! ```
//!
//! # IDX1 label file layout
//! ```text
//! bytes  0-3:   0x00000801  (magic: uint8 data, 1 dimension)
//! bytes  4-7:   N           (number of labels, big-endian u32)
//! bytes  8..:   N bytes, each a digit in [0, 9]
//! ```
//!
//! Pixels are kept at their raw 0-255 intensity; nothing is normalized here.
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::data::labeled_image::LabeledImage;

pub const IMAGE_MAGIC: u32 = 0x0000_0803;
pub const LABEL_MAGIC: u32 = 0x0000_0801;
pub const CLASS_COUNT: usize = 10;

const IMAGE_HEADER_LEN: usize = 16;
const LABEL_HEADER_LEN: usize = 8;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IDX {file} file truncated: need {expected} bytes, got {actual}")]
    Truncated {
        file: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("IDX {file} file: magic number mismatch (expected {expected:#010x}, got {actual:#010x})")]
    BadMagic {
        file: &'static str,
        expected: u32,
        actual: u32,
    },

    #[error("IDX file mismatch: image file declares {images} items but label file declares {labels}")]
    CountMismatch { images: usize, labels: usize },

    #[error("IDX label at index {index}: {label} is not a digit")]
    LabelOutOfRange { index: usize, label: u8 },

    #[error("IDX image file: rows * cols * items overflows usize")]
    Overflow,

    #[error("IDX image shape {actual_rows}x{actual_cols} does not match {expected_rows}x{expected_cols}")]
    ShapeMismatch {
        expected_rows: usize,
        expected_cols: usize,
        actual_rows: usize,
        actual_cols: usize,
    },
}

impl DecodeError {
    /// `true` for structural problems (magic, counts, labels, shape); `false` for
    /// unreadable or short input.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            DecodeError::BadMagic { .. }
                | DecodeError::CountMismatch { .. }
                | DecodeError::LabelOutOfRange { .. }
                | DecodeError::Overflow
                | DecodeError::ShapeMismatch { .. }
        )
    }
}

/// Reads both files fully and decodes them. File handles are released before
/// parsing starts.
pub fn read_idx_pair(image_path: &Path, label_path: &Path) -> Result<Vec<LabeledImage>, DecodeError> {
    let image_bytes = std::fs::read(image_path).map_err(|source| DecodeError::Io {
        path: image_path.to_path_buf(),
        source,
    })?;
    let label_bytes = std::fs::read(label_path).map_err(|source| DecodeError::Io {
        path: label_path.to_path_buf(),
        source,
    })?;
    let images = parse_idx_pair(&image_bytes, &label_bytes)?;
    debug!(
        images = %image_path.display(),
        labels = %label_path.display(),
        count = images.len(),
        "decoded IDX pair"
    );
    Ok(images)
}

/// Decodes an in-memory image/label pair into labeled images, in file order.
pub fn parse_idx_pair(image_bytes: &[u8], label_bytes: &[u8]) -> Result<Vec<LabeledImage>, DecodeError> {
    // ── Headers ─────────────────────────────────────────────────────────────

    require_len("image", image_bytes, IMAGE_HEADER_LEN)?;
    check_magic("image", read_be_u32(image_bytes, 0), IMAGE_MAGIC)?;
    let n_items = read_be_u32(image_bytes, 4) as usize;
    let rows = read_be_u32(image_bytes, 8) as usize;
    let cols = read_be_u32(image_bytes, 12) as usize;

    require_len("label", label_bytes, LABEL_HEADER_LEN)?;
    check_magic("label", read_be_u32(label_bytes, 0), LABEL_MAGIC)?;
    let label_count = read_be_u32(label_bytes, 4) as usize;

    if label_count != n_items {
        return Err(DecodeError::CountMismatch { images: n_items, labels: label_count });
    }

    // ── Bodies ──────────────────────────────────────────────────────────────

    let n_pixels = rows.checked_mul(cols).ok_or(DecodeError::Overflow)?;
    let image_data_len = n_items.checked_mul(n_pixels).ok_or(DecodeError::Overflow)?;
    let required_image_len = IMAGE_HEADER_LEN
        .checked_add(image_data_len)
        .ok_or(DecodeError::Overflow)?;
    require_len("image", image_bytes, required_image_len)?;
    require_len("label", label_bytes, LABEL_HEADER_LEN + n_items)?;

    let image_data = &image_bytes[IMAGE_HEADER_LEN..required_image_len];
    let label_data = &label_bytes[LABEL_HEADER_LEN..LABEL_HEADER_LEN + n_items];

    let mut images = Vec::with_capacity(n_items);
    for (index, &label) in label_data.iter().enumerate() {
        if label as usize >= CLASS_COUNT {
            return Err(DecodeError::LabelOutOfRange { index, label });
        }
        let start = index * n_pixels;
        let pixels = image_data[start..start + n_pixels].to_vec();
        images.push(LabeledImage::from_exact(rows, cols, label, pixels));
    }

    Ok(images)
}

fn read_be_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes([bytes[offset], bytes[offset + 1], bytes[offset + 2], bytes[offset + 3]])
}

fn require_len(file: &'static str, bytes: &[u8], expected: usize) -> Result<(), DecodeError> {
    if bytes.len() < expected {
        return Err(DecodeError::Truncated { file, expected, actual: bytes.len() });
    }
    Ok(())
}

fn check_magic(file: &'static str, actual: u32, expected: u32) -> Result<(), DecodeError> {
    if actual != expected {
        return Err(DecodeError::BadMagic { file, expected, actual });
    }
    Ok(())
}
