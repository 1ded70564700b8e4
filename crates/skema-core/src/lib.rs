//! Skema Core - domain and application layers for the schematic generator.
//!
//! Skema generates clean-architecture TypeScript building blocks (use cases,
//! controllers, DTOs, services) one file at a time. This crate holds the pure
//! logic: casing conversion, schematic validation, name normalization, and
//! the linear scaffold pipeline. All I/O — prompting, template rendering,
//! filesystem writes — happens behind ports implemented by `skema-adapters`
//! and the CLI crate.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            skema-cli (CLI)              │
//! │   argument parsing, config, prompts     │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │           GenerateService               │
//! │   resolve → validate → normalize →      │
//! │   materialize → report                  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     Ports (Prompter, TemplateEngine,    │
//! │             Filesystem)                 │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    skema-adapters / skema-cli           │
//! │  (LocalFilesystem, BuiltinTemplates,    │
//! │   DialoguerPrompter, test doubles)      │
//! └─────────────────────────────────────────┘
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateInput, GenerateReport, GenerateService,
        ports::{Artifact, Filesystem, Prompter, TemplateEngine, TemplateVars},
    };
    pub use crate::domain::{
        NamingConfig, NamingPattern, ResolvedName, ScaffoldRequest, SchematicKind, TargetPath,
    };
    pub use crate::error::{SkemaError, SkemaResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
