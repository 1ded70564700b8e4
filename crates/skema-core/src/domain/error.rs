//! Domain errors: business-rule violations, no I/O concerns.

use thiserror::Error;

use crate::domain::schematic::SchematicKind;

/// Root domain error type.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// The resolved schematic kind is not in the closed set.
    #[error(
        "unsupported schematic '{kind}', expected one of: {}",
        SchematicKind::names().join(", ")
    )]
    UnsupportedSchematic { kind: String },
}

impl DomainError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnsupportedSchematic { kind } => vec![
                format!("'{kind}' is not a schematic Skema knows about"),
                "Supported schematics:".into(),
                "  • usecase (u)    - application use case".into(),
                "  • controller (c) - HTTP controller".into(),
                "  • dto (d)        - data transfer object".into(),
                "  • service (s)    - domain service".into(),
            ],
        }
    }
}
