use crate::{math::matrix::Matrix, layers::dense::Layer};

const ETA_PLUS: f64 = 1.2;
const ETA_MINUS: f64 = 0.5;
const INITIAL_STEP: f64 = 0.1;
const MAX_STEP: f64 = 50.0;
const MIN_STEP: f64 = 1e-6;

/// Resilient propagation (iRprop⁻).
///
/// Each weight keeps its own step size, which grows while the gradient sign
/// is stable and shrinks when it flips. Only the sign of the batch gradient
/// is used, so gradients may be summed rather than averaged. A sign flip
/// skips that weight's update for the epoch.
///
/// State is sized lazily on the first `step` and rebuilt if the layer
/// shapes change.
#[derive(Debug, Default)]
pub struct Rprop {
    layers: Vec<LayerState>,
}

#[derive(Debug)]
struct LayerState {
    weights: ParamState,
    biases: ParamState,
}

#[derive(Debug)]
struct ParamState {
    step_sizes: Matrix,
    prev_grads: Matrix,
}

impl Rprop {
    pub fn new() -> Rprop {
        Rprop::default()
    }

    /// Applies one update from full-batch gradients, one `(weights, biases)`
    /// pair per layer.
    pub fn step(&mut self, layers: &mut [Layer], grads: Vec<(Matrix, Matrix)>) {
        if !self.fits(layers) {
            self.layers = layers.iter().map(LayerState::for_layer).collect();
        }

        for ((layer, (w_grad, b_grad)), state) in layers.iter_mut().zip(grads).zip(&mut self.layers) {
            state.weights.update(&mut layer.weights, &w_grad);
            state.biases.update(&mut layer.biases, &b_grad);
        }
    }

    fn fits(&self, layers: &[Layer]) -> bool {
        self.layers.len() == layers.len()
            && self.layers.iter().zip(layers).all(|(state, layer)| {
                state.weights.step_sizes.rows == layer.weights.rows
                    && state.weights.step_sizes.cols == layer.weights.cols
            })
    }
}

impl LayerState {
    fn for_layer(layer: &Layer) -> LayerState {
        LayerState {
            weights: ParamState::new(layer.weights.rows, layer.weights.cols),
            biases: ParamState::new(layer.biases.rows, layer.biases.cols),
        }
    }
}

impl ParamState {
    fn new(rows: usize, cols: usize) -> ParamState {
        ParamState {
            step_sizes: Matrix::filled(rows, cols, INITIAL_STEP),
            prev_grads: Matrix::zeros(rows, cols),
        }
    }

    fn update(&mut self, params: &mut Matrix, grads: &Matrix) {
        for r in 0..params.rows {
            for c in 0..params.cols {
                let mut grad = grads.data[r][c];
                let step = &mut self.step_sizes.data[r][c];
                let change = grad * self.prev_grads.data[r][c];

                if change > 0.0 {
                    *step = (*step * ETA_PLUS).min(MAX_STEP);
                } else if change < 0.0 {
                    *step = (*step * ETA_MINUS).max(MIN_STEP);
                    grad = 0.0;
                }

                params.data[r][c] -= sign(grad) * *step;
                self.prev_grads.data[r][c] = grad;
            }
        }
    }
}

/// Like `f64::signum` but zero for zero.
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}
