//! Command-line form checking.
//!
//! The `household-check` binary delegates to these functions so the flow can
//! be exercised in tests without spawning a process.

use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::Path;

use clap::ValueEnum;
use household_validation::ValidationError;
use serde_json::Value;
use thiserror::Error;
use tracing::info;

use crate::config::CheckSettings;
use crate::domain::{Error, FormKind, ValidatedForm, validate_form};

/// Errors surfaced by the checker.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Config {
        /// Loader error message.
        message: String,
    },
    /// No form kind was configured.
    #[error("missing required setting: --form (or HOUSEHOLD_CHECK_FORM)")]
    MissingForm,
    /// The configured form kind is not recognised.
    #[error("unknown form '{value}'; expected one of: {expected}")]
    UnknownForm {
        /// Value supplied by the user.
        value: String,
        /// Comma separated list of accepted kinds.
        expected: String,
    },
    /// The payload could not be read.
    #[error("failed to read payload from {origin}: {source}")]
    Read {
        /// Path, or `stdin`.
        origin: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The payload is not JSON.
    #[error("payload is not valid JSON: {source}")]
    Parse {
        /// Parser error.
        #[source]
        source: serde_json::Error,
    },
    /// The payload failed validation.
    #[error("payload rejected: {0}")]
    Rejected(#[from] ValidationError),
    /// The validated form could not be rendered.
    #[error("failed to render output: {source}")]
    Render {
        /// Serialiser error.
        #[source]
        source: serde_json::Error,
    },
    /// The rendered form could not be written out.
    #[error("failed to write output: {source}")]
    Write {
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl CliError {
    /// Error envelope written to stderr.
    ///
    /// Rejections carry the same payload an HTTP handler would return with
    /// status 400. I/O and rendering failures are internal errors; everything
    /// else is an invalid request.
    #[must_use]
    pub fn envelope(&self) -> Error {
        match self {
            Self::Rejected(err) => Error::from(err.clone()),
            Self::Read { .. } | Self::Render { .. } | Self::Write { .. } => {
                Error::internal(self.to_string())
            }
            Self::Config { .. }
            | Self::MissingForm
            | Self::UnknownForm { .. }
            | Self::Parse { .. } => Error::invalid_request(self.to_string()),
        }
    }
}

/// Resolve the configured form kind.
///
/// # Errors
///
/// Returns [`CliError::MissingForm`] when unset and
/// [`CliError::UnknownForm`] for unrecognised names.
pub fn form_kind(settings: &CheckSettings) -> Result<FormKind, CliError> {
    let value = settings
        .form
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or(CliError::MissingForm)?;

    FormKind::from_str(value, true).map_err(|_| CliError::UnknownForm {
        value: value.to_owned(),
        expected: FormKind::value_variants()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", "),
    })
}

/// Parse and validate one JSON payload.
///
/// # Errors
///
/// Returns [`CliError::Parse`] for malformed JSON and
/// [`CliError::Rejected`] when a field fails validation.
pub fn check_payload(kind: FormKind, reader: impl Read) -> Result<ValidatedForm, CliError> {
    let payload: Value =
        serde_json::from_reader(reader).map_err(|source| CliError::Parse { source })?;
    Ok(validate_form(kind, &payload)?)
}

/// Run the checker and return the pretty-printed normalised payload.
///
/// Reads from `settings.input` when set, otherwise from `stdin`.
///
/// # Errors
///
/// Returns [`CliError`] when configuration, input, or validation fails.
///
/// # Example
///
/// ```
/// use household::cli::run;
/// use household::config::CheckSettings;
///
/// let settings = CheckSettings {
///     form: Some("household".to_owned()),
///     input: None,
///     json_logs: false,
/// };
/// let output = run(&settings, r#"{"householdName": "smiths"}"#.as_bytes()).expect("valid payload");
/// assert!(output.contains("\"Smiths\""));
/// ```
pub fn run(settings: &CheckSettings, stdin: impl Read) -> Result<String, CliError> {
    let kind = form_kind(settings)?;
    let form = match settings.input.as_deref() {
        Some(path) => check_payload(kind, open_input(path)?)?,
        None => check_payload(kind, stdin)?,
    };
    info!(form = %kind, "payload accepted");
    serde_json::to_string_pretty(&form).map_err(|source| CliError::Render { source })
}

/// Write the rendered form followed by a newline.
///
/// # Errors
///
/// Returns [`CliError::Write`] when the writer fails.
pub fn write_output(mut out: impl Write, output: &str) -> Result<(), CliError> {
    writeln!(out, "{output}")
        .and_then(|()| out.flush())
        .map_err(|source| CliError::Write { source })
}

fn open_input(path: &Path) -> Result<BufReader<File>, CliError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| CliError::Read {
            origin: path.display().to_string(),
            source,
        })
}
