//! Error handling for the Skema CLI.
//!
//! Structured errors with user-friendly messages, actionable suggestions,
//! and exit-code mapping. All failures are terminal for the invocation;
//! there is no retry path anywhere in the tool.

use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;
use tracing::error;

use skema_core::error::{ErrorCategory, SkemaError};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// The required configuration artifact is absent. Raised before any
    /// prompt is issued (fail-fast ordering).
    #[error("configuration missing: {path} not found", path = path.display())]
    ConfigMissing { path: PathBuf },

    /// A configuration file could not be read, parsed, or written.
    #[error("configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error propagated from `skema-core`.
    ///
    /// Wrapped here so the CLI can attach suggestions drawn from the core
    /// error's category without touching core internals.
    #[error("{0}")]
    Core(#[from] SkemaError),

    /// An I/O operation failed outside the core pipeline.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl CliError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigMissing { path } => vec![
                format!("No configuration artifact at {}", path.display()),
                "Run 'skema init' to create a default skema.toml".into(),
                "Or pass --config <FILE> to point at an existing one".into(),
            ],
            Self::ConfigError { message, .. } => vec![
                format!("Configuration problem: {message}"),
                "scaffold_pattern must be one of: lowercase, kebab-case, PascalCase, camelCase"
                    .into(),
            ],
            Self::Core(e) => e.suggestions(),
            Self::IoError { .. } => vec![
                "Check file permissions and available disk space".into(),
            ],
        }
    }

    /// Map this error to an OS exit code (see the table in `main.rs`).
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::ConfigMissing { .. } | Self::ConfigError { .. } => 4,
            Self::Core(e) => match e.category() {
                ErrorCategory::Validation => 2,
                ErrorCategory::NotFound => 3,
                ErrorCategory::Filesystem | ErrorCategory::Internal => 1,
            },
            Self::IoError { .. } => 1,
        }
    }

    /// Emit a structured log event for this error.
    pub fn log(&self) {
        error!(exit_code = self.exit_code(), "{self}");
    }

    /// Plain (no colour) user-facing rendering: message plus suggestions.
    pub fn format_plain(&self) -> String {
        let mut out = format!("error: {self}\n");
        for suggestion in self.suggestions() {
            out.push_str(&format!("  {suggestion}\n"));
        }
        out
    }

    /// Coloured rendering for TTY stderr.
    pub fn format_colored(&self) -> String {
        let mut out = format!("{} {}\n", "error:".red().bold(), self);
        for suggestion in self.suggestions() {
            out.push_str(&format!("  {}\n", suggestion.dimmed()));
        }
        out
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}
