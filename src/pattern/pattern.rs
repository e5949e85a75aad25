use crate::data::{LabeledImage, CLASS_COUNT};
use crate::error::Result;
use crate::pattern::target_policy::TargetPolicy;

/// One (input vector, target vector) example.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    /// Row-major pixels as `f64`, raw 0-255 scale.
    pub inputs: Vec<f64>,
    /// One value per class.
    pub targets: Vec<f64>,
}

/// Encodes one labeled image.
///
/// `targets[i]` is `class_targets.value(i)` when `i == image.label`, otherwise
/// `non_class_targets.value(i)`. Inputs are the pixel intensities cast to
/// `f64` with no rescaling.
pub fn encode_pattern(
    image: &LabeledImage,
    class_targets: &TargetPolicy,
    non_class_targets: &TargetPolicy,
) -> Result<Pattern> {
    class_targets.validate(CLASS_COUNT)?;
    non_class_targets.validate(CLASS_COUNT)?;

    let label = image.label as usize;
    let targets = (0..CLASS_COUNT)
        .map(|i| {
            if i == label {
                class_targets.value(i)
            } else {
                non_class_targets.value(i)
            }
        })
        .collect();

    let inputs = image.pixels().iter().map(|&px| px as f64).collect();

    Ok(Pattern { inputs, targets })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn mnist_sized_image_encodes_to_784_inputs() {
        let pixels: Vec<u8> = (0..784).map(|i| (i % 256) as u8).collect();
        let image = LabeledImage::new(28, 28, 4, pixels).unwrap();

        let pattern = encode_pattern(&image, &TargetPolicy::Uniform(1.0), &TargetPolicy::Uniform(0.0)).unwrap();

        assert_eq!(pattern.inputs.len(), 784);
        assert_eq!(pattern.inputs[255], 255.0);
        assert_eq!(pattern.inputs[256], 0.0);
        assert_eq!(pattern.targets.len(), CLASS_COUNT);
        for (i, &t) in pattern.targets.iter().enumerate() {
            assert_eq!(t, if i == 4 { 1.0 } else { 0.0 });
        }
    }

    #[test]
    fn per_class_policies_are_indexed_by_output() {
        let image = LabeledImage::new(1, 2, 1, vec![200, 3]).unwrap();
        let class: TargetPolicy = vec![1.0, 0.9, 1.0, 0.9, 1.0, 0.9, 1.0, 0.9, 1.0, 0.9].into();
        let non_class: TargetPolicy = vec![0.1, 0.0, 0.1, 0.0, 0.1, 0.0, 0.1, 0.0, 0.1, 0.0].into();

        let pattern = encode_pattern(&image, &class, &non_class).unwrap();

        assert_eq!(pattern.inputs, vec![200.0, 3.0]);
        assert_eq!(pattern.targets, vec![0.1, 0.9, 0.1, 0.0, 0.1, 0.0, 0.1, 0.0, 0.1, 0.0]);
    }

    #[test]
    fn short_policy_vector_is_config_error() {
        let image = LabeledImage::new(1, 1, 0, vec![0]).unwrap();
        let err = encode_pattern(&image, &vec![1.0; 9].into(), &TargetPolicy::Uniform(0.0)).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
