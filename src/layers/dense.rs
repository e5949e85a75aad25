use serde::{Serialize, Deserialize};

use crate::{math::matrix::Matrix, activation::activation::ActivationFunction};

#[derive(Debug, Serialize, Deserialize)]
pub struct Layer{
    pub size: usize,
    #[serde(skip)]
    pub neurons: Matrix,
    #[serde(skip)]
    pre_neurons: Matrix,  // pre-activation values (z = Wx + b) needed for correct derivative
    pub weights: Matrix,
    pub biases: Matrix,
    pub activator: ActivationFunction
}

impl Layer {
    /// Xavier-initialised weights (shape `input_size × size`), zero biases.
    pub fn new(size: usize, input_size: usize, activation: ActivationFunction) -> Layer {
        Layer {
            size,
            neurons: Matrix::zeros(1, size),
            pre_neurons: Matrix::zeros(1, size),
            weights: Matrix::xavier(input_size, size),
            biases: Matrix::zeros(1, size),
            activator: activation
        }
    }

    pub fn input_size(&self) -> usize {
        self.weights.rows
    }

    pub fn feed_from(&mut self, input: &Matrix) -> &Matrix {
        let z = &(input * &self.weights) + &self.biases;
        self.neurons = z.map(|x| self.activator.function(x));
        self.pre_neurons = z;
        &self.neurons
    }

    /// Computes gradients for one sample. Returns (weights_grad, biases_grad).
    /// `next_layer_delta` is ∂L/∂a for this layer (error in activation space).
    pub fn compute_gradients(
        &self,
        next_layer_delta: &Matrix,
        inputs: &Matrix,
    ) -> (Matrix, Matrix) {
        // Use pre-activation z so that derivative(z) = σ'(z) is computed correctly
        let act_derivative = self.pre_neurons.map(|x| self.activator.derivative(x));
        // δ = error ⊙ σ'(z)
        let layer_delta = next_layer_delta.hadamard(&act_derivative);

        let weights_grad = &inputs.transpose() * &layer_delta;

        (weights_grad, layer_delta)
    }
}
