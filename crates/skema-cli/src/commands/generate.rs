//! Implementation of the `skema generate` command.
//!
//! Responsibility: load the project configuration, expand CLI aliases,
//! wire the adapters into the core pipeline, and display results. No
//! scaffolding logic lives here.
//!
//! Ordering matters: configuration is loaded first, so a missing
//! `skema.toml` aborts before the pipeline gets a chance to prompt.

use tracing::{debug, info, instrument};

use skema_adapters::{BuiltinTemplates, LocalFilesystem};
use skema_core::application::{GenerateInput, GenerateService};

use crate::{
    cli::{GenerateArgs, GlobalArgs, expand_schematic_alias},
    config::ProjectConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `skema generate` command.
#[instrument(skip_all)]
pub fn execute(args: GenerateArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let root = std::env::current_dir()?;

    // 1. Config before anything interactive - fail-fast on a missing artifact.
    let config = ProjectConfig::load(global.config.as_ref(), &root)?;
    debug!(
        pattern = %config.naming.pattern,
        config = %config.path.display(),
        "Configuration loaded"
    );

    // 2. Expand single-letter aliases; full validation is the pipeline's job.
    let schematic = args.schematic.as_deref().map(expand_schematic_alias);

    // 3. Wire adapters and run the pipeline.
    let service = GenerateService::new(
        make_prompter(),
        Box::new(BuiltinTemplates::with_overrides(&root)),
        Box::new(LocalFilesystem::new()),
    );

    let input = GenerateInput {
        schematic,
        name: args.name,
        with_spec: !args.no_spec,
    };

    if input.schematic.is_none() || input.name.is_none() {
        output.info(&format!(
            "Naming pattern: {} (from {})",
            config.naming.pattern,
            config.path.display()
        ))?;
    }

    info!(root = %root.display(), "Generate started");
    let report = service.run(input, &config.naming, &root)?;

    // 4. Report.
    output.success(&format!(
        "Generated {} ({})",
        relative_display(&report.file, &root),
        report.class_identifier,
    ))?;
    if let Some(spec_file) = &report.spec_file {
        output.print(&format!("  with spec {}", relative_display(spec_file, &root)))?;
    }

    Ok(())
}

/// Show paths relative to the project root where possible.
fn relative_display(path: &std::path::Path, root: &std::path::Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

#[cfg(feature = "interactive")]
fn make_prompter() -> Box<dyn skema_core::application::ports::Prompter> {
    Box::new(crate::prompt::DialoguerPrompter::new())
}

#[cfg(not(feature = "interactive"))]
fn make_prompter() -> Box<dyn skema_core::application::ports::Prompter> {
    Box::new(crate::prompt::UnavailablePrompter)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
