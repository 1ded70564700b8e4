//! Naming configuration and deterministic name derivation.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::casing::{to_camel_case, to_kebab_case, to_lower_case, to_pascal_case};

/// The casing convention applied to generated folder and file names.
///
/// The serde enumerants match the values accepted in the configuration
/// artifact (`scaffold_pattern` in `skema.toml`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NamingPattern {
    #[serde(rename = "lowercase")]
    Lowercase,
    #[default]
    #[serde(rename = "kebab-case")]
    KebabCase,
    #[serde(rename = "PascalCase")]
    PascalCase,
    #[serde(rename = "camelCase")]
    CamelCase,
}

impl NamingPattern {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lowercase => "lowercase",
            Self::KebabCase => "kebab-case",
            Self::PascalCase => "PascalCase",
            Self::CamelCase => "camelCase",
        }
    }

    /// Apply this pattern to a raw identifier.
    pub fn apply(&self, raw: &str) -> String {
        match self {
            Self::Lowercase => to_lower_case(raw),
            Self::KebabCase => to_kebab_case(raw),
            Self::PascalCase => to_pascal_case(raw),
            Self::CamelCase => to_camel_case(raw),
        }
    }
}

impl fmt::Display for NamingPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Project-level naming configuration.
///
/// Loaded once per invocation from the project configuration artifact and
/// passed down by value — never read from ambient state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Pattern for folder and file names; defaults to kebab-case when the
    /// artifact omits it.
    pub pattern: NamingPattern,
}

impl NamingConfig {
    pub fn new(pattern: NamingPattern) -> Self {
        Self { pattern }
    }
}

/// A raw entity name normalized for emission.
///
/// `folder_name` follows the configured pattern; `class_identifier` is
/// always PascalCase regardless of that pattern, because a generated type
/// name must be a valid identifier — never kebab-case or separator-laden
/// lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedName {
    pub folder_name: String,
    pub class_identifier: String,
}

impl ResolvedName {
    /// Derive both names from a raw identifier. Deterministic.
    pub fn derive(raw_name: &str, pattern: NamingPattern) -> Self {
        Self {
            folder_name: pattern.apply(raw_name),
            class_identifier: to_pascal_case(raw_name),
        }
    }
}
