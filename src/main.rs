// Trains and tests the MNIST classifier once.
//
//   cargo run --release                 # built-in defaults
//   cargo run --release -- run.json     # RunConfig as JSON; missing fields use defaults
//
// Dataset files are expected under data/ unless the config says otherwise.
// RUST_LOG overrides the log level.
use std::process::ExitCode;
use std::time::Instant;

use tracing::error;
use tracing_subscriber::EnvFilter;

use ferrite_mnist::{run_network, RunConfig};

fn main() -> ExitCode {
    let config = match std::env::args().nth(1) {
        Some(path) => RunConfig::load_json(&path),
        None => Ok(RunConfig::default()),
    };

    let default_level = match &config {
        Ok(c) if c.debug => "debug",
        _ => "info",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config = match config {
        Ok(c) => c,
        Err(e) => {
            error!("Couldn't read config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    let result = run_network(&config);
    let elapsed = start.elapsed().as_secs_f64();

    match result {
        Ok(result) => {
            print!("{}", result.summary(config.preview_patterns));
            println!("Run took: {:.3}s", elapsed);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            println!("Run took: {:.3}s", elapsed);
            ExitCode::FAILURE
        }
    }
}
