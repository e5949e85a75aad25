use crate::activation::activation::ActivationFunction;

/// Shape of a fresh three-layer feed-forward network:
/// `input_size → hidden_neurons → output_size`.
#[derive(Debug, Clone, PartialEq)]
pub struct Topology {
    pub input_size: usize,
    pub hidden_neurons: usize,
    pub output_size: usize,
    /// Applied on both the hidden and the output layer.
    pub activation: ActivationFunction,
}

impl Topology {
    pub fn feed_forward(input_size: usize, hidden_neurons: usize, output_size: usize) -> Topology {
        Topology {
            input_size,
            hidden_neurons,
            output_size,
            activation: ActivationFunction::Sigmoid,
        }
    }

    /// `(size, input_size, activation)` per layer, input to output.
    pub fn layer_specs(&self) -> Vec<(usize, usize, ActivationFunction)> {
        vec![
            (self.hidden_neurons, self.input_size, self.activation.clone()),
            (self.output_size, self.hidden_neurons, self.activation.clone()),
        ]
    }
}
