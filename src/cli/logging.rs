use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use filegate::error::Result;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Filter comes from `RUST_LOG`; output goes
/// to stderr, or is appended to `log_file` when one is given.
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}
