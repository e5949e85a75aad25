use std::fmt;

/// One decoded MNIST record: a `rows × cols` grid of raw intensities plus
/// its digit label.
///
/// Pixels are stored row-major in a single buffer; `pixel(r, c)` indexes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledImage {
    pub rows: usize,
    pub cols: usize,
    pub label: u8,
    pixels: Vec<u8>,
}

impl LabeledImage {
    /// Returns `None` if `pixels.len() != rows * cols`.
    pub fn new(rows: usize, cols: usize, label: u8, pixels: Vec<u8>) -> Option<LabeledImage> {
        if pixels.len() != rows * cols {
            return None;
        }
        Some(LabeledImage { rows, cols, label, pixels })
    }

    /// Caller guarantees `pixels.len() == rows * cols`.
    pub(crate) fn from_exact(rows: usize, cols: usize, label: u8, pixels: Vec<u8>) -> LabeledImage {
        debug_assert_eq!(pixels.len(), rows * cols);
        LabeledImage { rows, cols, label, pixels }
    }

    pub fn pixel(&self, row: usize, col: usize) -> u8 {
        self.pixels[row * self.cols + col]
    }

    /// Row-major view of all pixels.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

/// Prints the label followed by the pixel grid, one image row per line.
impl fmt::Display for LabeledImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "label: {}", self.label)?;
        for row in self.pixels.chunks(self.cols.max(1)) {
            for px in row {
                write!(f, "{} ", px)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
