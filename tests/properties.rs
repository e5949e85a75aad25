//! Property tests for the judge, the encoder and the run result.

use proptest::prelude::*;

use ferrite_mnist::{encode_pattern, is_successful, LabeledImage, RunResult, TargetPolicy};

fn class_values() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.5f64..1.0, 10)
}

proptest! {
    #[test]
    fn judging_is_deterministic(
        classes in class_values(),
        outputs in prop::collection::vec(0.0f64..1.0, 10),
        label in 0usize..10,
    ) {
        let policy = TargetPolicy::PerClass(classes.clone());
        let mut targets = vec![0.0; 10];
        targets[label] = classes[label];

        let first = is_successful(&targets, &outputs, &policy);
        let second = is_successful(&targets, &outputs, &policy);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn judge_passes_iff_no_other_output_is_strictly_closer(
        classes in class_values(),
        outputs in prop::collection::vec(0.0f64..1.0, 10),
        label in 0usize..10,
    ) {
        let policy = TargetPolicy::PerClass(classes.clone());
        // Non-class targets sit well below every class value.
        let mut targets = vec![0.0; 10];
        targets[label] = classes[label];

        let distance = |i: usize| (outputs[i] - classes[i]).abs();
        let own = distance(label);
        let beaten = (0..10).any(|x| x != label && distance(x) < own);

        prop_assert_eq!(is_successful(&targets, &outputs, &policy), !beaten);
    }

    #[test]
    fn exact_ties_never_fail(
        class in 0.5f64..1.0,
        output in 0.0f64..1.0,
        label in 0usize..10,
    ) {
        let policy = TargetPolicy::Uniform(class);
        let mut targets = vec![0.0; 10];
        targets[label] = class;
        let outputs = vec![output; 10];

        prop_assert!(is_successful(&targets, &outputs, &policy));
    }

    #[test]
    fn mnist_image_encodes_to_expected_shape(
        pixels in prop::collection::vec(any::<u8>(), 784),
        label in 0u8..10,
        class in -1.0f64..1.0,
        non_class in -1.0f64..1.0,
    ) {
        let image = LabeledImage::new(28, 28, label, pixels.clone()).unwrap();
        let pattern = encode_pattern(&image, &TargetPolicy::Uniform(class), &TargetPolicy::Uniform(non_class)).unwrap();

        prop_assert_eq!(pattern.inputs.len(), 784);
        prop_assert_eq!(pattern.targets.len(), 10);
        for (i, &px) in pixels.iter().enumerate() {
            prop_assert_eq!(pattern.inputs[i], px as f64);
        }
        for (i, &t) in pattern.targets.iter().enumerate() {
            prop_assert_eq!(t, if i == label as usize { class } else { non_class });
        }
    }

    #[test]
    fn success_rate_is_bounded_fraction(flags in prop::collection::vec(any::<bool>(), 0..200)) {
        let result = RunResult::new(vec![0.0; flags.len()], flags.clone(), true);

        prop_assert!((0.0..=1.0).contains(&result.success_rate));
        if !flags.is_empty() {
            let expected = flags.iter().filter(|&&f| f).count() as f64 / flags.len() as f64;
            prop_assert_eq!(result.success_rate, expected);
        }
    }
}
