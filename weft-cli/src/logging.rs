//! Structured logging for the `weft` binary.
//!
//! Diagnostics are written to stderr so stdout carries nothing but command
//! output. `RUST_LOG` picks the level (default `info`) and
//! [`LOG_FORMAT_ENV`] picks between the human and JSON layouts.

use std::{env, io, str::FromStr, sync::OnceLock};

use thiserror::Error;
use tracing::{subscriber::SetGlobalDefaultError, warn};
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt};

/// Environment variable selecting the log layout, `human` or `json`.
pub const LOG_FORMAT_ENV: &str = "WEFT_LOG_FORMAT";

const DEFAULT_DIRECTIVE: &str = "info";

static INSTALLED: OnceLock<LogFormat> = OnceLock::new();

/// Layout of the events written to stderr.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    /// One readable line per event.
    #[default]
    Human,
    /// One JSON object per event, with the current span attached.
    Json,
}

impl LogFormat {
    /// Reads the layout from [`LOG_FORMAT_ENV`], defaulting to
    /// [`LogFormat::Human`] when the variable is unset.
    ///
    /// # Errors
    /// Returns [`LoggingError`] when the value is not Unicode or names an
    /// unknown layout.
    pub fn from_env() -> Result<Self, LoggingError> {
        match env::var(LOG_FORMAT_ENV) {
            Ok(raw) => raw.parse(),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(source @ env::VarError::NotUnicode(_)) => {
                Err(LoggingError::InvalidUnicode { source })
            }
        }
    }
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalised = raw.trim().to_ascii_lowercase();
        match normalised.as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(LoggingError::UnsupportedFormat {
                provided: normalised,
            }),
        }
    }
}

/// Errors raised while installing structured logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// `WEFT_LOG_FORMAT` held bytes that are not valid Unicode.
    #[error("`WEFT_LOG_FORMAT` is not valid Unicode: {source}")]
    InvalidUnicode {
        /// Underlying lookup failure.
        #[source]
        source: env::VarError,
    },
    /// `WEFT_LOG_FORMAT` named a layout other than `human` or `json`.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Normalised value supplied by the user.
        provided: String,
    },
    /// Another global subscriber was installed first.
    #[error("failed to install tracing subscriber: {source}")]
    InstallFailed {
        /// Error raised by `tracing`.
        #[source]
        source: SetGlobalDefaultError,
    },
}

/// Installs the global subscriber once and returns the layout in use.
///
/// Later calls return the layout chosen by the first successful call without
/// touching the environment again.
///
/// # Errors
/// Returns [`LoggingError`] when the layout cannot be read or another global
/// subscriber is already installed.
pub fn init_logging() -> Result<LogFormat, LoggingError> {
    if let Some(format) = INSTALLED.get() {
        return Ok(*format);
    }
    let format = LogFormat::from_env()?;
    install(format)?;
    Ok(*INSTALLED.get_or_init(|| format))
}

fn install(format: LogFormat) -> Result<(), LoggingError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    let output = match format {
        LogFormat::Human => fmt::layer().with_writer(io::stderr).boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_writer(io::stderr)
            .boxed(),
    };
    let subscriber = tracing_subscriber::registry().with(filter).with(output);
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|source| LoggingError::InstallFailed { source })?;

    // Crates logging through `log` reach the subscriber only once bridged.
    if let Err(err) = LogTracer::init() {
        warn!(error = %err, "`log` records will not be forwarded");
    }
    Ok(())
}
