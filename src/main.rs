//! jpgopt - shrink a directory of JPEG photos in place.
//!
//! Takes no arguments: the directory, quality and maximum width are
//! compile-time constants in [`jpgopt::config`].

use jpgopt::config::{Config, NAME, VERSION};
use jpgopt::processor::Optimizer;
use jpgopt::terminal::print_error;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_logging();

    let config = Config::default();
    tracing::debug!(
        version = VERSION,
        dir = %config.input_dir.display(),
        quality = config.quality,
        max_width = config.max_width,
        "{NAME} starting"
    );

    let optimizer = Optimizer::new(config);
    match optimizer.run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e.to_string());
            ExitCode::from(1)
        }
    }
}

/// Diagnostics go to stderr so stdout carries only the status lines.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
