//! Application layer for Skema.
//!
//! - **Services**: the scaffold pipeline ([`GenerateService`])
//! - **Ports**: trait seams for prompting, templates, and the filesystem
//! - **Errors**: orchestration failures (business-rule failures live in
//!   `crate::domain`)

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::{GenerateInput, GenerateReport, GenerateService};

pub use ports::{Artifact, Filesystem, Prompter, TemplateEngine, TemplateVars};
