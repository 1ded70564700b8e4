//! Application layer errors.
//!
//! These represent orchestration failures, not business-rule violations.
//! Every one of them is terminal for the invocation: the pipeline has no
//! retry policy and no partial-success state.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while driving the scaffold pipeline.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Directory creation failed for a reason other than "already exists".
    #[error("could not create directory {path}: {reason}")]
    DirectoryCreationFailed { path: PathBuf, reason: String },

    /// Writing a generated file failed.
    #[error("could not write {path}: {reason}")]
    FileWriteFailed { path: PathBuf, reason: String },

    /// The template collaborator could not produce output.
    #[error("template rendering failed: {reason}")]
    TemplateRenderFailed { reason: String },

    /// An interactive prompt was interrupted or could not be read.
    #[error("prompt failed: {reason}")]
    PromptFailed { reason: String },
}

impl ApplicationError {
    /// User-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DirectoryCreationFailed { path, .. } => vec![
                format!("Failed to create: {}", path.display()),
                "Check that you have write permissions in this project".into(),
            ],
            Self::FileWriteFailed { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check permissions and available disk space".into(),
            ],
            Self::TemplateRenderFailed { .. } => vec![
                "A schematic template is missing or unreadable".into(),
                "If you override templates in .skema/templates/, check the file names".into(),
            ],
            Self::PromptFailed { .. } => vec![
                "The interactive prompt was interrupted".into(),
                "Pass the schematic and name as arguments to skip prompting".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DirectoryCreationFailed { .. } | Self::FileWriteFailed { .. } => {
                ErrorCategory::Filesystem
            }
            Self::TemplateRenderFailed { .. } => ErrorCategory::NotFound,
            Self::PromptFailed { .. } => ErrorCategory::Internal,
        }
    }
}
