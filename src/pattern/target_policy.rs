use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The value an output neuron is trained towards, per class index.
///
/// In JSON this is either a bare number (`1.0`) or an array with one entry
/// per class (`[1.0, 0.9, ...]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TargetPolicy {
    /// Same value for every class.
    Uniform(f64),
    /// One value per output index.
    PerClass(Vec<f64>),
}

impl TargetPolicy {
    /// Value for output index `class`.
    ///
    /// # Panics
    /// Panics if a `PerClass` policy is shorter than `class + 1`; call
    /// `validate` first.
    pub fn value(&self, class: usize) -> f64 {
        match self {
            TargetPolicy::Uniform(v) => *v,
            TargetPolicy::PerClass(values) => values[class],
        }
    }

    /// Like `value`, but `None` when a `PerClass` policy has no entry for
    /// `class`.
    pub fn get(&self, class: usize) -> Option<f64> {
        match self {
            TargetPolicy::Uniform(v) => Some(*v),
            TargetPolicy::PerClass(values) => values.get(class).copied(),
        }
    }

    /// A `PerClass` policy must have exactly `class_count` entries.
    pub fn validate(&self, class_count: usize) -> Result<()> {
        match self {
            TargetPolicy::Uniform(_) => Ok(()),
            TargetPolicy::PerClass(values) if values.len() == class_count => Ok(()),
            TargetPolicy::PerClass(values) => Err(Error::Config(format!(
                "target policy has {} values, expected {}",
                values.len(),
                class_count
            ))),
        }
    }
}

impl From<f64> for TargetPolicy {
    fn from(value: f64) -> Self {
        TargetPolicy::Uniform(value)
    }
}

impl From<Vec<f64>> for TargetPolicy {
    fn from(values: Vec<f64>) -> Self {
        TargetPolicy::PerClass(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_applies_to_every_index() {
        let policy = TargetPolicy::from(0.8);
        assert_eq!(policy.value(0), 0.8);
        assert_eq!(policy.value(9), 0.8);
        assert!(policy.validate(10).is_ok());
        assert_eq!(policy.get(1_000), Some(0.8));
    }

    #[test]
    fn get_past_per_class_end_is_none() {
        let policy = TargetPolicy::from(vec![1.0, 0.9]);
        assert_eq!(policy.get(1), Some(0.9));
        assert_eq!(policy.get(2), None);
    }

    #[test]
    fn per_class_length_is_checked() {
        let policy = TargetPolicy::from(vec![1.0; 9]);
        assert!(matches!(policy.validate(10), Err(Error::Config(_))));
        assert!(TargetPolicy::from(vec![1.0; 10]).validate(10).is_ok());
    }

    #[test]
    fn deserializes_number_or_array() {
        let uniform: TargetPolicy = serde_json::from_str("0.5").unwrap();
        assert_eq!(uniform, TargetPolicy::Uniform(0.5));

        let per_class: TargetPolicy = serde_json::from_str("[1.0, 0.9]").unwrap();
        assert_eq!(per_class, TargetPolicy::PerClass(vec![1.0, 0.9]));
    }
}
