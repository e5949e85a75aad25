use std::path::Path;
use std::sync::atomic::Ordering;

use tracing::{debug, info, warn};

use crate::config::RunConfig;
use crate::data::{read_idx_pair, DecodeError, LabeledImage, CLASS_COUNT};
use crate::engine::{Codec, Engine, Topology};
use crate::error::{Error, Result};
use crate::eval::{format_input_grid, is_successful, RunResult};
use crate::network::Network;
use crate::pattern::{build_pattern_set, PatternSet, TargetPolicy};
use crate::train::run_options::RunOptions;

/// Input width used when no dataset image is available to take it from.
const MNIST_SIDE: usize = 28;

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Trains the model at `config.model_path` (or a fresh one) for
/// `config.steps × config.epochs_per_step` epochs, judges every test pattern
/// and writes the model back.
///
/// # Errors
/// - `Error::Config` for an invalid config; nothing is read.
/// - `Error::DataUnavailable` if either dataset split cannot be decoded, or
///   the test images are not the same shape as the training images.
/// - `Error::ModelLoad` if the model file exists but neither codec reads it.
/// - `Error::Engine` if a loaded model's input or output size does not match
///   the data.
///
/// A failed save is logged and reflected in `RunResult::model_saved`; it
/// never discards the computed result.
pub fn run<E: Engine>(config: &RunConfig, options: &RunOptions) -> Result<RunResult> {
    config.validate()?;

    // ── Datasets ────────────────────────────────────────────────────────────
    let train_images = load_split("train", &config.data.train_images, &config.data.train_labels)?;
    let test_images = load_split("test", &config.data.test_images, &config.data.test_labels)?;

    let shape = split_shape(&train_images, &test_images)?;
    let input_size = shape.map(|(r, c)| r * c).unwrap_or(MNIST_SIDE * MNIST_SIDE);
    let grid_width = shape.map(|(_, c)| c).unwrap_or(MNIST_SIDE);

    // ── Model ───────────────────────────────────────────────────────────────
    let mut engine: E = acquire_model(config, input_size)?;
    if shape.is_some() && engine.input_size() != input_size {
        return Err(Error::Engine(format!(
            "model expects {} inputs but the dataset provides {}",
            engine.input_size(),
            input_size
        )));
    }
    if engine.output_size() != CLASS_COUNT {
        return Err(Error::Engine(format!(
            "model produces {} outputs but there are {} classes",
            engine.output_size(),
            CLASS_COUNT
        )));
    }

    // ── Patterns ────────────────────────────────────────────────────────────
    let train = build_pattern_set(train_images, &config.class_targets, &config.non_class_targets)?;
    let test = build_pattern_set(test_images, &config.class_targets, &config.non_class_targets)?;
    info!(train = train.len(), test = test.len(), "encoded pattern sets");

    train_steps(&mut engine, &train, &test, config, options);

    let (errors, successes) = judge_test_set(
        &mut engine,
        &test,
        &config.class_targets,
        config.debug,
        grid_width,
    );

    let model_saved = persist(&engine, &config.model_path, config.model_codec);

    let result = RunResult::new(errors, successes, model_saved);
    info!(
        success_rate = result.success_rate,
        successes = result.success_count(),
        total = test.len(),
        "run done"
    );
    Ok(result)
}

/// `run` with the crate's own network and no hooks.
pub fn run_network(config: &RunConfig) -> Result<RunResult> {
    run::<Network>(config, &RunOptions::new())
}

// ---------------------------------------------------------------------------
// Stages
// ---------------------------------------------------------------------------

fn load_split(split: &'static str, images: &Path, labels: &Path) -> Result<Vec<LabeledImage>> {
    let decoded = read_idx_pair(images, labels)
        .map_err(|source| Error::DataUnavailable { split, source })?;
    info!(split, count = decoded.len(), "loaded dataset");
    Ok(decoded)
}

/// `(rows, cols)` shared by both splits, or `None` when both are empty.
fn split_shape(train: &[LabeledImage], test: &[LabeledImage]) -> Result<Option<(usize, usize)>> {
    let train_shape = train.first().map(|m| (m.rows, m.cols));
    let test_shape = test.first().map(|m| (m.rows, m.cols));
    match (train_shape, test_shape) {
        (Some((expected_rows, expected_cols)), Some((actual_rows, actual_cols)))
            if (expected_rows, expected_cols) != (actual_rows, actual_cols) =>
        {
            Err(Error::DataUnavailable {
                split: "test",
                source: DecodeError::ShapeMismatch { expected_rows, expected_cols, actual_rows, actual_cols },
            })
        }
        _ => Ok(train_shape.or(test_shape)),
    }
}

/// Loads the model if the file exists (compressed first, then uncompressed),
/// otherwise creates a fresh `input_size → hidden → CLASS_COUNT` network.
fn acquire_model<E: Engine>(config: &RunConfig, input_size: usize) -> Result<E> {
    let path = &config.model_path;
    if !path.exists() {
        info!(
            path = %path.display(),
            input_size,
            hidden = config.hidden_neurons,
            outputs = CLASS_COUNT,
            "no saved model, creating a new one"
        );
        return Ok(E::create(&Topology::feed_forward(input_size, config.hidden_neurons, CLASS_COUNT)));
    }

    match E::load(path, Codec::Compressed) {
        Ok(engine) => {
            info!(path = %path.display(), codec = Codec::Compressed.as_str(), "loaded model");
            Ok(engine)
        }
        Err(compressed) => {
            debug!(path = %path.display(), error = %compressed, "compressed load failed, retrying uncompressed");
            match E::load(path, Codec::Uncompressed) {
                Ok(engine) => {
                    info!(path = %path.display(), codec = Codec::Uncompressed.as_str(), "loaded model");
                    Ok(engine)
                }
                Err(uncompressed) => Err(Error::ModelLoad {
                    path: path.clone(),
                    compressed: compressed.to_string(),
                    uncompressed: uncompressed.to_string(),
                }),
            }
        }
    }
}

fn train_steps<E: Engine>(
    engine: &mut E,
    train: &PatternSet,
    test: &PatternSet,
    config: &RunConfig,
    options: &RunOptions,
) {
    info!(
        steps = config.steps,
        epochs_per_step = config.epochs_per_step,
        "training {} epochs",
        config.steps.saturating_mul(config.epochs_per_step)
    );

    for step in 0..config.steps {
        if let Some(ref flag) = options.stop_flag {
            if flag.load(Ordering::Relaxed) {
                warn!(remaining = config.steps - step, "stop requested, skipping remaining steps");
                break;
            }
        }

        let stats = engine.train(train, test, config.epochs_per_step);
        info!(
            step = step + 1,
            epochs = (step + 1).saturating_mul(config.epochs_per_step),
            train_error = stats.train_error,
            test_error = ?stats.test_error,
            elapsed_ms = stats.elapsed_ms,
            "training step done"
        );

        if let Some(ref tx) = options.progress_tx {
            // A gone receiver only means nobody is watching.
            let _ = tx.send(stats);
        }
    }
}

/// Tests every pattern in index order, returning per-pattern error and
/// success flags.
fn judge_test_set<E: Engine>(
    engine: &mut E,
    test: &PatternSet,
    class_targets: &TargetPolicy,
    debug: bool,
    grid_width: usize,
) -> (Vec<f64>, Vec<bool>) {
    info!(patterns = test.len(), "testing the network");

    let mut errors = Vec::with_capacity(test.len());
    let mut successes = Vec::with_capacity(test.len());

    for (i, (inputs, targets)) in test.iter().enumerate() {
        let error = engine.test(inputs, targets);
        let outputs = engine.outputs();

        if debug {
            debug!(
                pattern = i,
                input_size = inputs.len(),
                "input:\n{}",
                format_input_grid(inputs, grid_width)
            );
            debug!(pattern = i, ?targets, ?outputs, error, "tested pattern");
        }

        successes.push(is_successful(targets, outputs, class_targets));
        errors.push(error);
    }

    (errors, successes)
}

fn persist<E: Engine>(engine: &E, path: &Path, codec: Codec) -> bool {
    match engine.save(path, codec) {
        Ok(()) => {
            info!(path = %path.display(), codec = codec.as_str(), "saved model");
            true
        }
        Err(source) => {
            let err = Error::ModelSave { path: path.to_path_buf(), source };
            warn!("{}", err);
            false
        }
    }
}
