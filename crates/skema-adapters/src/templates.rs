//! Builtin schematic templates with `{{name}}` substitution.
//!
//! Each schematic kind ships an embedded TypeScript template pair (source +
//! spec). A project may override any of them by dropping a file into
//! `.skema/templates/` next to its configuration artifact:
//!
//! ```text
//! .skema/templates/usecase.ts.tmpl
//! .skema/templates/usecase.spec.ts.tmpl
//! ```
//!
//! Two substitution variables are available: `{{name}}`, the PascalCase
//! class identifier, and `{{file}}`, the stem of the source file emitted
//! alongside (`<folder>.<kind>`, no extension). Spec templates import the
//! source module through `{{file}}`.

use std::path::PathBuf;

use skema_core::{
    application::{
        ApplicationError,
        ports::{Artifact, TemplateEngine, TemplateVars},
    },
    domain::SchematicKind,
    error::SkemaResult,
};
use tracing::debug;

const USECASE_TS: &str = include_str!("templates/usecase.ts.tmpl");
const USECASE_SPEC_TS: &str = include_str!("templates/usecase.spec.ts.tmpl");
const CONTROLLER_TS: &str = include_str!("templates/controller.ts.tmpl");
const CONTROLLER_SPEC_TS: &str = include_str!("templates/controller.spec.ts.tmpl");
const DTO_TS: &str = include_str!("templates/dto.ts.tmpl");
const DTO_SPEC_TS: &str = include_str!("templates/dto.spec.ts.tmpl");
const SERVICE_TS: &str = include_str!("templates/service.ts.tmpl");
const SERVICE_SPEC_TS: &str = include_str!("templates/service.spec.ts.tmpl");

/// Template engine backed by the embedded template set, with optional
/// per-project overrides.
#[derive(Debug, Clone, Default)]
pub struct BuiltinTemplates {
    overrides_root: Option<PathBuf>,
}

impl BuiltinTemplates {
    /// Builtin templates only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builtin templates, shadowed by any files under
    /// `<project_root>/.skema/templates/`.
    pub fn with_overrides(project_root: impl Into<PathBuf>) -> Self {
        Self {
            overrides_root: Some(project_root.into().join(".skema/templates")),
        }
    }

    fn override_name(kind: SchematicKind, artifact: Artifact) -> String {
        match artifact {
            Artifact::Source => format!("{}.ts.tmpl", kind.as_str()),
            Artifact::Spec => format!("{}.spec.ts.tmpl", kind.as_str()),
        }
    }

    fn lookup(&self, kind: SchematicKind, artifact: Artifact) -> SkemaResult<String> {
        if let Some(root) = &self.overrides_root {
            let path = root.join(Self::override_name(kind, artifact));
            if path.exists() {
                debug!(path = %path.display(), "Using template override");
                return std::fs::read_to_string(&path).map_err(|e| {
                    ApplicationError::TemplateRenderFailed {
                        reason: format!("override {} unreadable: {e}", path.display()),
                    }
                    .into()
                });
            }
        }

        let builtin = match (kind, artifact) {
            (SchematicKind::UseCase, Artifact::Source) => USECASE_TS,
            (SchematicKind::UseCase, Artifact::Spec) => USECASE_SPEC_TS,
            (SchematicKind::Controller, Artifact::Source) => CONTROLLER_TS,
            (SchematicKind::Controller, Artifact::Spec) => CONTROLLER_SPEC_TS,
            (SchematicKind::Dto, Artifact::Source) => DTO_TS,
            (SchematicKind::Dto, Artifact::Spec) => DTO_SPEC_TS,
            (SchematicKind::Service, Artifact::Source) => SERVICE_TS,
            (SchematicKind::Service, Artifact::Spec) => SERVICE_SPEC_TS,
        };
        Ok(builtin.to_string())
    }
}

impl TemplateEngine for BuiltinTemplates {
    fn render(
        &self,
        kind: SchematicKind,
        artifact: Artifact,
        vars: &TemplateVars,
    ) -> SkemaResult<String> {
        let template = self.lookup(kind, artifact)?;
        Ok(template
            .replace("{{name}}", &vars.class_name)
            .replace("{{file}}", &vars.module_stem))
    }
}
