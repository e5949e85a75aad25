use serde::{Serialize, Deserialize};
use std::f64::consts::E;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ActivationFunction {
    Sigmoid,
}

impl ActivationFunction {
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
        }
    }

    /// Derivative evaluated at the pre-activation `x`.
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => {
                let fx = self.function(x);
                fx * (1.0 - fx)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_is_centered_at_half() {
        let s = ActivationFunction::Sigmoid;
        assert_eq!(s.function(0.0), 0.5);
        assert_eq!(s.derivative(0.0), 0.25);
        assert!(s.function(40.0) > 0.999);
        assert!(s.function(-40.0) < 0.001);
    }
}
