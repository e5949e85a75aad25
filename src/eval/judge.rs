use crate::pattern::TargetPolicy;

/// Tolerance for recognising a target entry as the class value. Absorbs
/// floating-point representation only.
pub const TARGET_CLASS_EPSILON: f64 = 1e-13;

/// Winner-margin check for one test pattern.
///
/// Every index `j` whose target equals its class value (within
/// `TARGET_CLASS_EPSILON`) is a designated class. For each designated `j`,
/// the pattern fails if some other output `x` is strictly closer to its own
/// class value than output `j` is to its class value. Equal distances pass.
///
/// With non-binary targets more than one index can be designated; all of
/// them must hold their margin.
pub fn is_successful(targets: &[f64], outputs: &[f64], class_values: &TargetPolicy) -> bool {
    // An output index without a class value cannot be measured.
    let Some(distances) = outputs
        .iter()
        .enumerate()
        .map(|(x, out)| class_values.get(x).map(|v| (out - v).abs()))
        .collect::<Option<Vec<f64>>>()
    else {
        return false;
    };

    targets.iter().enumerate().all(|(j, target)| match class_values.get(j) {
        None => false,
        Some(class_value) if (target - class_value).abs() < TARGET_CLASS_EPSILON => {
            match distances.get(j) {
                Some(&own) => !distances
                    .iter()
                    .enumerate()
                    .any(|(x, &other)| x != j && other < own),
                // No output for a designated class.
                None => false,
            }
        }
        Some(_) => true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn per_class(values: &[f64]) -> TargetPolicy {
        TargetPolicy::PerClass(values.to_vec())
    }

    #[test]
    fn true_class_closest_passes() {
        assert!(is_successful(&[0.0, 1.0, 0.0], &[0.1, 0.8, 0.2], &per_class(&[1.0, 1.0, 1.0])));
    }

    #[test]
    fn other_output_closer_fails() {
        assert!(!is_successful(&[0.0, 1.0, 0.0], &[0.1, 0.8, 0.85], &per_class(&[1.0, 1.0, 1.0])));
    }

    #[test]
    fn per_class_values_fail_when_other_is_closer_to_its_own() {
        assert!(!is_successful(&[0.0, 0.7, 0.0], &[0.1, 0.8, 0.85], &per_class(&[1.0, 0.7, 0.8])));
    }

    #[test]
    fn per_class_values_pass_when_true_class_holds_margin() {
        assert!(is_successful(&[0.0, 0.7, 0.0], &[0.1, 0.8, 0.67], &per_class(&[1.0, 0.7, 0.8])));
    }

    #[test]
    fn ties_pass() {
        assert!(is_successful(&[0.0, 1.0], &[0.75, 0.75], &TargetPolicy::Uniform(1.0)));
    }

    #[test]
    fn every_designated_index_must_hold() {
        // Indices 0 and 2 both carry their class value; index 2 loses to 0 in the first case.
        let classes = per_class(&[1.0, 1.0, 0.5]);
        assert!(!is_successful(&[1.0, 0.0, 0.5], &[0.75, 0.5, 0.0], &classes));
        assert!(is_successful(&[1.0, 0.0, 0.5], &[0.75, 0.0, 0.25], &classes));
    }

    #[test]
    fn no_designated_index_passes_vacuously() {
        assert!(is_successful(&[0.0, 0.0], &[0.0, 1.0], &TargetPolicy::Uniform(1.0)));
    }

    #[test]
    fn near_equal_target_within_epsilon_is_designated() {
        let target = 0.9 + 1e-15;
        assert!(!is_successful(&[target, 0.0], &[0.0, 0.9], &TargetPolicy::Uniform(0.9)));
    }

    #[test]
    fn more_outputs_than_class_values_fails() {
        assert!(!is_successful(&[0.0, 1.0], &[0.0, 1.0, 0.0], &per_class(&[1.0, 1.0])));
    }

    #[test]
    fn more_targets_than_class_values_fails() {
        assert!(!is_successful(&[0.0, 1.0, 0.0], &[0.0, 1.0], &per_class(&[1.0, 1.0])));
    }

    #[test]
    fn missing_output_for_designated_class_fails() {
        assert!(!is_successful(&[0.0, 1.0], &[0.0], &TargetPolicy::Uniform(1.0)));
    }
}
