//! Unified error handling for Skema Core.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for core operations.
#[derive(Debug, Error, Clone)]
pub enum SkemaError {
    /// Business-rule violations (e.g. an unsupported schematic kind).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Orchestration failures (filesystem, templates, prompts).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl SkemaError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Error category for display and exit-code mapping.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::Validation,
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display and exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Filesystem,
    Internal,
}

/// Convenient result type alias.
pub type SkemaResult<T> = Result<T, SkemaError>;
