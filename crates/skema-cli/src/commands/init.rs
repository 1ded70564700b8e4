//! `skema init` — create a default configuration file.

use std::path::Path;

use crate::{
    cli::InitArgs,
    config::{CONFIG_FILE_NAME, ProjectConfig},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Write a default `skema.toml` into the current directory.
pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);

    // Bail early if the file already exists and --force was not given.
    if config_path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {} (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    let artifact = ProjectConfig::default_artifact()?;

    std::fs::write(config_path, &artifact).map_err(|e| CliError::IoError {
        message: format!("failed to write {}", config_path.display()),
        source: e,
    })?;

    output.success(&format!(
        "Configuration created at {}",
        config_path.display(),
    ))?;

    Ok(())
}
