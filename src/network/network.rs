use std::io;
use std::path::Path;
use std::time::Instant;

use serde::{Serialize, Deserialize};

use crate::{
    activation::activation::ActivationFunction,
    engine::{Codec, Engine, StepStats, Topology},
    layers::dense::Layer,
    loss::mse::MseLoss,
    math::matrix::Matrix,
    optim::rprop::Rprop,
    pattern::PatternSet,
};

/// Fully connected feed-forward network trained with full-batch Rprop on
/// mean-squared error.
#[derive(Debug, Serialize, Deserialize)]
pub struct Network {
    pub layers: Vec<Layer>,
    /// Total epochs trained, carried across save/load.
    #[serde(default)]
    pub epochs_trained: usize,
    #[serde(skip)]
    trainer: Rprop,
}

impl Network {
    /// Builds a network from (size, input_size, activation) tuples.
    pub fn new(layer_specs: Vec<(usize, usize, ActivationFunction)>) -> Network {
        let layers = layer_specs.into_iter()
            .map(|(size, input_size, activation)| Layer::new(size, input_size, activation))
            .collect();
        Network { layers, epochs_trained: 0, trainer: Rprop::new() }
    }

    /// Forward pass; stores activations in each layer for backprop.
    pub fn forward(&mut self, input: &[f64]) -> &[f64] {
        let mut current = Matrix::row(input);
        for layer in &mut self.layers {
            current = layer.feed_from(&current).clone();
        }
        self.last_outputs()
    }

    fn last_outputs(&self) -> &[f64] {
        self.layers
            .last()
            .and_then(|layer| layer.neurons.data.first())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// One epoch: accumulate gradients over every pattern, then a single
    /// Rprop update. Returns the mean error over the epoch.
    fn run_one_epoch(&mut self, patterns: &PatternSet) -> f64 {
        if patterns.is_empty() {
            return 0.0;
        }

        let mut acc_grads: Vec<(Matrix, Matrix)> = self.layers.iter()
            .map(|layer| (
                Matrix::zeros(layer.weights.rows, layer.weights.cols),
                Matrix::zeros(layer.biases.rows, layer.biases.cols),
            ))
            .collect();
        let mut total_error = 0.0;

        for (input, expected) in patterns.iter() {
            let output = self.forward(input);
            total_error += MseLoss::loss(output, expected);

            let error = MseLoss::derivative(output, expected);
            let mut delta = Matrix::row(&error);

            // Backward pass
            for i in (0..self.layers.len()).rev() {
                let input_for_layer = if i == 0 {
                    Matrix::row(input)
                } else {
                    self.layers[i - 1].neurons.clone()
                };

                let (w_grad, b_grad) = self.layers[i].compute_gradients(&delta, &input_for_layer);

                if i > 0 {
                    // Propagate δ_i through weights to get ∂L/∂a_{i-1}
                    delta = &b_grad * &self.layers[i].weights.transpose();
                }

                acc_grads[i].0.add_assign(&w_grad);
                acc_grads[i].1.add_assign(&b_grad);
            }
        }

        self.trainer.step(&mut self.layers, acc_grads);

        total_error / patterns.len() as f64
    }

    /// Mean error over a pattern set without touching weights.
    fn eval_error(&mut self, patterns: &PatternSet) -> Option<f64> {
        if patterns.is_empty() {
            return None;
        }
        let total: f64 = patterns.iter()
            .map(|(input, expected)| {
                let output = self.forward(input);
                MseLoss::loss(output, expected)
            })
            .sum();
        Some(total / patterns.len() as f64)
    }
}

impl Engine for Network {
    fn create(topology: &Topology) -> Network {
        Network::new(topology.layer_specs())
    }

    fn load(path: &Path, codec: Codec) -> io::Result<Network> {
        let network: Network = codec.read(path)?;
        if network.layers.is_empty() {
            return Err(io::Error::new(io::ErrorKind::InvalidData, "model has no layers"));
        }
        Ok(network)
    }

    fn save(&self, path: &Path, codec: Codec) -> io::Result<()> {
        codec.write(path, self)
    }

    fn input_size(&self) -> usize {
        self.layers.first().map(Layer::input_size).unwrap_or(0)
    }

    fn output_size(&self) -> usize {
        self.layers.last().map(|layer| layer.size).unwrap_or(0)
    }

    fn train(&mut self, train: &PatternSet, test: &PatternSet, epochs: usize) -> StepStats {
        let t_start = Instant::now();

        let mut train_error = 0.0;
        for _ in 0..epochs {
            train_error = self.run_one_epoch(train);
            self.epochs_trained += 1;
        }
        let test_error = self.eval_error(test);

        StepStats {
            epochs_completed: self.epochs_trained,
            train_error,
            test_error,
            elapsed_ms: t_start.elapsed().as_millis() as u64,
        }
    }

    fn test(&mut self, inputs: &[f64], targets: &[f64]) -> f64 {
        let output = self.forward(inputs);
        MseLoss::loss(output, targets)
    }

    fn outputs(&self) -> &[f64] {
        self.last_outputs()
    }
}
