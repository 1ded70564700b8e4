//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the pipeline needs from the outside world.
//! `skema-adapters` provides the production filesystem and template
//! implementations; the CLI crate provides the interactive prompter.

use std::path::Path;

use crate::domain::SchematicKind;
use crate::error::SkemaResult;

/// Which artifact of a schematic is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    /// The source file (`<name>.<kind>.ts`).
    Source,
    /// The companion test file (`<name>.<kind>.spec.ts`).
    Spec,
}

/// Port for the two interactive questions the pipeline may ask.
///
/// Implemented by:
/// - `skema_cli::prompt::DialoguerPrompter` (production, `interactive` feature)
/// - `skema_adapters::prompt::ScriptedPrompter` (testing)
///
/// The pipeline suspends at these calls and resumes with the typed answer.
/// An interrupt (Ctrl-C, EOF) surfaces as `ApplicationError::PromptFailed`
/// and aborts the invocation.
pub trait Prompter: Send + Sync {
    /// Single-choice selection among the schematic kinds.
    fn select_schematic(&self, kinds: &[&'static str]) -> SkemaResult<String>;

    /// Free-text prompt for the entity name. The message already embeds the
    /// resolved schematic kind, so it cannot be produced before the
    /// schematic question completes.
    fn input_name(&self, message: &str) -> SkemaResult<String>;
}

/// Substitution variables available to a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateVars {
    /// PascalCase class identifier; substituted for `{{name}}`.
    pub class_name: String,
    /// File stem of the emitted source file (`<folder>.<kind>`, no
    /// extension); substituted for `{{file}}`. Spec templates import the
    /// source module through it, so it must match the file the same run
    /// writes.
    pub module_stem: String,
}

/// Port for template lookup and variable substitution.
///
/// Implemented by `skema_adapters::templates::BuiltinTemplates` (embedded
/// templates with optional per-project overrides).
pub trait TemplateEngine: Send + Sync {
    /// Render the template for a schematic artifact, substituting the
    /// variables in `vars`.
    fn render(
        &self,
        kind: SchematicKind,
        artifact: Artifact,
        vars: &TemplateVars,
    ) -> SkemaResult<String>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `skema_adapters::filesystem::LocalFilesystem` (production)
/// - `skema_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parents. Idempotent: an already existing
    /// directory is success, not an error.
    fn create_dir_all(&self, path: &Path) -> SkemaResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> SkemaResult<()>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;
}
