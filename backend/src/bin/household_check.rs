//! Household form checker.
//!
//! Validates one JSON form payload and prints the normalised form. This binary
//! delegates to `household::cli` so the flow stays testable without spawning a
//! process.
//!
//! # Examples
//! ```sh
//! echo '{"householdName": "smiths"}' | household-check --form household
//! ```

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use household::cli::{self, CliError};
use household::config::CheckSettings;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    let settings = match CheckSettings::load_from_iter(env::args_os()) {
        Ok(settings) => settings,
        Err(err) => {
            return report(&CliError::Config {
                message: err.to_string(),
            });
        }
    };
    init_tracing(settings.json_logs);

    match cli::run(&settings, io::stdin().lock())
        .and_then(|output| cli::write_output(io::stdout().lock(), &output))
    {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

fn init_tracing(json: bool) {
    let builder = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr);
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}

fn report(err: &CliError) -> ExitCode {
    let envelope = err.envelope();
    let rendered = serde_json::to_string(&envelope).unwrap_or_else(|_| err.to_string());
    if let Err(write_err) = writeln!(io::stderr().lock(), "{rendered}") {
        drop(write_err);
    }
    ExitCode::FAILURE
}
