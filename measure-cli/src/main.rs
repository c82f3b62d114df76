//! Measure launcher script filter
//!
//! Usage: measure "<query>"
//!
//! Prints `{"items": [...]}` on stdout. Exits non-zero when the query was
//! rejected (a guidance item is still printed) or when the `decimal_places`
//! setting is missing or malformed (nothing is printed). Logs go to stderr
//! and are filtered with `RUST_LOG`, warnings only by default.

use measure::{Measure, Status};
use measure_core::{FormatConfig, MeasureError};
use std::env;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(Status::Success) => ExitCode::SUCCESS,
        Ok(Status::Failure) => ExitCode::FAILURE,
        Err(e) => {
            error!(code = %e.code, "{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<Status, MeasureError> {
    let config = FormatConfig::from_env()?;
    let measure = Measure::standard(config)?;

    // A launcher with an empty query box passes no argument at all
    let input = env::args().nth(1).unwrap_or_default();
    debug!(input = %input, units = measure.catalog().len(), "answering query");

    let response = measure.respond(&input)?;
    let json = response.to_json()?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json)
        .and_then(|_| stdout.flush())
        .map_err(|e| MeasureError::internal(format!("could not write items: {}", e)))?;

    Ok(response.status)
}
