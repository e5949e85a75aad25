use crate::data::LabeledImage;
use crate::error::Result;
use crate::pattern::pattern::{encode_pattern, Pattern};
use crate::pattern::target_policy::TargetPolicy;

/// Index-aligned input and target sequences: `inputs()[i]` pairs with
/// `targets()[i]`. Only grows through `push`, so both always have the same
/// length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatternSet {
    inputs: Vec<Vec<f64>>,
    targets: Vec<Vec<f64>>,
}

impl PatternSet {
    pub fn new() -> PatternSet {
        PatternSet::default()
    }

    pub fn with_capacity(capacity: usize) -> PatternSet {
        PatternSet {
            inputs: Vec::with_capacity(capacity),
            targets: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, pattern: Pattern) {
        self.inputs.push(pattern.inputs);
        self.targets.push(pattern.targets);
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    pub fn inputs(&self) -> &[Vec<f64>] {
        &self.inputs
    }

    pub fn targets(&self) -> &[Vec<f64>] {
        &self.targets
    }

    /// Iterates `(inputs, targets)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (&[f64], &[f64])> {
        self.inputs
            .iter()
            .zip(self.targets.iter())
            .map(|(i, t)| (i.as_slice(), t.as_slice()))
    }
}

/// Encodes every image in order. The images are consumed; no shuffling,
/// filtering or deduplication happens here.
pub fn build_pattern_set(
    images: Vec<LabeledImage>,
    class_targets: &TargetPolicy,
    non_class_targets: &TargetPolicy,
) -> Result<PatternSet> {
    let mut set = PatternSet::with_capacity(images.len());
    for image in images {
        set.push(encode_pattern(&image, class_targets, non_class_targets)?);
    }
    Ok(set)
}
