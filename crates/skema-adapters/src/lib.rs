//! Infrastructure adapters for Skema.
//!
//! This crate implements the ports defined in `skema_core::application::ports`.
//! It contains all I/O concerns: filesystem access, the builtin template set,
//! and a scripted prompter for non-interactive use and tests.

pub mod filesystem;
pub mod prompt;
pub mod templates;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use prompt::ScriptedPrompter;
pub use templates::BuiltinTemplates;
