//! Core domain layer for Skema.
//!
//! Pure business logic with zero I/O:
//!
//! - **No async**: everything here is synchronous
//! - **No I/O**: no filesystem, no prompts, no external calls
//! - **No external crates**: std + thiserror + serde derives only
//! - **Immutable values**: derived names never mutate after construction

pub mod casing;
pub mod error;
pub mod naming;
pub mod request;
pub mod schematic;

// Re-exports for convenience
pub use casing::{to_camel_case, to_kebab_case, to_lower_case, to_pascal_case};
pub use error::DomainError;
pub use naming::{NamingConfig, NamingPattern, ResolvedName};
pub use request::{ScaffoldRequest, TargetPath};
pub use schematic::SchematicKind;
