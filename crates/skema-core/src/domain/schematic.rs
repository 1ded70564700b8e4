//! The closed set of schematic kinds Skema can generate.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A kind of schematic to generate.
///
/// The set is closed by design: validation is a membership check against
/// these four variants, never a lookup in mutable state. Single-letter CLI
/// aliases (`u`, `c`, `d`, `s`) are expanded at the CLI layer before this
/// type ever sees them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchematicKind {
    UseCase,
    Controller,
    Dto,
    Service,
}

impl SchematicKind {
    /// All kinds, in the order they are offered interactively.
    pub const ALL: [SchematicKind; 4] = [
        Self::UseCase,
        Self::Controller,
        Self::Dto,
        Self::Service,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UseCase => "usecase",
            Self::Controller => "controller",
            Self::Dto => "dto",
            Self::Service => "service",
        }
    }

    /// The suffix used in generated file names (`<name>.<suffix>.ts`).
    ///
    /// Currently identical to [`as_str`](Self::as_str); kept separate so the
    /// wire name and the file suffix can diverge without touching callers.
    pub const fn file_suffix(&self) -> &'static str {
        self.as_str()
    }

    /// The canonical names of all kinds, for prompts and error messages.
    pub fn names() -> [&'static str; 4] {
        Self::ALL.map(|k| k.as_str())
    }

    /// Membership check over arbitrary strings.
    ///
    /// Pure and infallible; the pipeline decides how to react to `false`.
    pub fn is_valid(kind: &str) -> bool {
        kind.parse::<SchematicKind>().is_ok()
    }
}

impl fmt::Display for SchematicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchematicKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "usecase" => Ok(Self::UseCase),
            "controller" => Ok(Self::Controller),
            "dto" => Ok(Self::Dto),
            "service" => Ok(Self::Service),
            other => Err(DomainError::UnsupportedSchematic { kind: other.into() }),
        }
    }
}
