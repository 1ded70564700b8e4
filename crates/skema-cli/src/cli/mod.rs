//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text. Single-letter schematic aliases (`u`, `c`, `d`, `s`) are
//! expanded here, in [`expand_schematic_alias`], before the core ever sees
//! the value — the pipeline validates full names only.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "skema",
    bin_name = "skema",
    version  = env!("CARGO_PKG_VERSION"),
    about    = "Schematic scaffolding for clean-architecture TypeScript projects",
    long_about = "Skema generates clean-architecture building blocks (use cases, \
                  controllers, DTOs, services) into your project's src/ tree, \
                  following the naming pattern configured in skema.toml.",
    after_help = "EXAMPLES:\n\
        \x20 skema generate usecase OrderTotal\n\
        \x20 skema g u OrderTotal          # single-letter alias\n\
        \x20 skema generate                # fully interactive\n\
        \x20 skema init                    # write a default skema.toml",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a schematic into the current project.
    #[command(
        visible_alias = "g",
        about = "Generate a schematic",
        after_help = "EXAMPLES:\n\
            \x20 skema generate usecase OrderTotal\n\
            \x20 skema generate controller user-profile --no-spec\n\
            \x20 skema g d Invoice"
    )]
    Generate(GenerateArgs),

    /// Write a default configuration file into the current directory.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 skema init\n\
            \x20 skema init --force   # overwrite an existing skema.toml"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 skema completions bash > ~/.local/share/bash-completion/completions/skema\n\
            \x20 skema completions zsh  > ~/.zfunc/_skema"
    )]
    Completions(CompletionsArgs),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `skema generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Schematic kind. Free text here: unknown values are rejected by the
    /// pipeline with the full allowed set, not by clap.
    #[arg(
        value_name = "SCHEMATIC",
        help = "Schematic kind: usecase|controller|dto|service (or u|c|d|s)"
    )]
    pub schematic: Option<String>,

    /// Entity name seed (any casing; it is normalized per skema.toml).
    #[arg(value_name = "NAME", help = "Entity name, e.g. OrderTotal")]
    pub name: Option<String>,

    /// Skip the companion spec file.
    #[arg(long = "no-spec", help = "Do not emit the .spec.ts companion file")]
    pub no_spec: bool,
}

/// Expand a single-letter schematic alias to its full name.
///
/// Anything that is not an alias passes through unchanged — including
/// invalid kinds, which the pipeline rejects with a proper error.
pub fn expand_schematic_alias(raw: &str) -> String {
    match raw {
        "u" => "usecase".into(),
        "c" => "controller".into(),
        "d" => "dto".into(),
        "s" => "service".into(),
        other => other.into(),
    }
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `skema init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `skema completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

// ── tests ─────────────────────────────────────────────────────────────────────
