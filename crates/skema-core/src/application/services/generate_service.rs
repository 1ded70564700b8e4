//! Generate Service - the scaffold pipeline.
//!
//! A linear, non-branching state machine:
//!
//! 1. ResolveSchematic - argument or single-choice prompt (always first)
//! 2. ResolveName      - argument or free-text prompt naming the schematic
//! 3. Validate         - membership check against the closed schematic set
//! 4. Normalize        - folder name per configured pattern, class name
//!    always PascalCase
//! 5. Materialize      - idempotent mkdir, render, write
//! 6. Report           - the written paths, or the first fatal error
//!
//! No step retries; every failure is terminal for the invocation. The only
//! suspension points are the two prompt calls in steps 1 and 2.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Artifact, Filesystem, Prompter, TemplateEngine, TemplateVars},
    domain::{NamingConfig, ResolvedName, ScaffoldRequest, SchematicKind, TargetPath},
    error::SkemaResult,
};

/// Unresolved invocation input: what the caller supplied on the command
/// line, with `None` standing for "ask interactively".
#[derive(Debug, Clone, Default)]
pub struct GenerateInput {
    pub schematic: Option<String>,
    pub name: Option<String>,
    pub with_spec: bool,
}

/// Outcome of a successful pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub class_identifier: String,
    pub file: PathBuf,
    pub spec_file: Option<PathBuf>,
}

/// Main scaffolding service.
pub struct GenerateService {
    prompter: Box<dyn Prompter>,
    templates: Box<dyn TemplateEngine>,
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    pub fn new(
        prompter: Box<dyn Prompter>,
        templates: Box<dyn TemplateEngine>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            prompter,
            templates,
            filesystem,
        }
    }

    /// Run the pipeline for one invocation.
    ///
    /// `root` is the project root the `src/` tree hangs off; the caller has
    /// already loaded `config` (config failures abort before this is ever
    /// called, so no prompt fires without a valid configuration).
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn run(
        &self,
        input: GenerateInput,
        config: &NamingConfig,
        root: &Path,
    ) -> SkemaResult<GenerateReport> {
        // 1. Resolve schematic - always before the name question.
        let kind_raw = match input.schematic {
            Some(kind) => kind,
            None => self.prompter.select_schematic(&SchematicKind::names())?,
        };

        // 2. Resolve name - the message references the resolved schematic,
        //    so this step genuinely depends on step 1's answer.
        let raw_name = match input.name {
            Some(name) => name,
            None => self.prompter.input_name(&format!(
                "What name would you like to use for the {kind_raw}?"
            ))?,
        };

        // 3. Validate against the closed set.
        let kind: SchematicKind = kind_raw.parse()?;
        let request = ScaffoldRequest::new(kind, raw_name, input.with_spec);

        // 4. Normalize.
        let resolved = ResolvedName::derive(&request.raw_name, config.pattern);
        debug!(
            folder = %resolved.folder_name,
            class = %resolved.class_identifier,
            pattern = %config.pattern,
            "Name normalized"
        );

        // 5. Materialize. The spec template imports the source module by
        //    its file stem, so both renders share the target's stem.
        let target = TargetPath::derive(&resolved, request.kind);
        self.filesystem.create_dir_all(&root.join(&target.folder))?;

        let vars = TemplateVars {
            class_name: resolved.class_identifier.clone(),
            module_stem: target.stem.clone(),
        };

        let file = root.join(&target.file);
        let content = self.templates.render(request.kind, Artifact::Source, &vars)?;
        self.filesystem.write_file(&file, &content)?;

        let spec_file = if request.with_spec {
            let path = root.join(&target.spec_file);
            let content = self.templates.render(request.kind, Artifact::Spec, &vars)?;
            self.filesystem.write_file(&path, &content)?;
            Some(path)
        } else {
            None
        };

        // 6. Report.
        info!(file = %file.display(), "Schematic generated");
        Ok(GenerateReport {
            class_identifier: resolved.class_identifier,
            file,
            spec_file,
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
