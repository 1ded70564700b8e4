//! Interactive prompter backed by dialoguer.
//!
//! Compiled in only with the `interactive` feature (default). Builds
//! without it get [`UnavailablePrompter`], which turns any prompt into an
//! error telling the user to pass arguments instead.

use skema_core::{
    application::{ApplicationError, ports::Prompter},
    error::SkemaResult,
};

#[cfg(feature = "interactive")]
pub use interactive::DialoguerPrompter;

#[cfg(feature = "interactive")]
mod interactive {
    use super::*;
    use dialoguer::{Input, Select};

    /// Production prompter: terminal single-choice and free-text questions.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct DialoguerPrompter;

    impl DialoguerPrompter {
        pub fn new() -> Self {
            Self
        }
    }

    impl Prompter for DialoguerPrompter {
        fn select_schematic(&self, kinds: &[&'static str]) -> SkemaResult<String> {
            let index = Select::new()
                .with_prompt("Which schematic would you like to generate?")
                .items(kinds)
                .default(0)
                .interact()
                .map_err(interrupt)?;
            Ok(kinds[index].to_string())
        }

        fn input_name(&self, message: &str) -> SkemaResult<String> {
            Input::<String>::new()
                .with_prompt(message)
                .interact_text()
                .map_err(interrupt)
        }
    }

    // Ctrl-C / EOF in the prompt layer is an unrecoverable abort.
    fn interrupt(e: dialoguer::Error) -> skema_core::error::SkemaError {
        ApplicationError::PromptFailed {
            reason: e.to_string(),
        }
        .into()
    }
}

/// Stand-in prompter for builds without the `interactive` feature.
#[cfg(not(feature = "interactive"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailablePrompter;

#[cfg(not(feature = "interactive"))]
impl Prompter for UnavailablePrompter {
    fn select_schematic(&self, _kinds: &[&'static str]) -> SkemaResult<String> {
        Err(unavailable())
    }

    fn input_name(&self, _message: &str) -> SkemaResult<String> {
        Err(unavailable())
    }
}

#[cfg(not(feature = "interactive"))]
fn unavailable() -> skema_core::error::SkemaError {
    ApplicationError::PromptFailed {
        reason: "interactive prompting is not available in this build; \
                 pass the schematic and name as arguments"
            .into(),
    }
    .into()
}
