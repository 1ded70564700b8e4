//! Project configuration: the `skema.toml` artifact.
//!
//! The artifact lives at the project root and declares one thing: the
//! naming pattern for generated folders and files.
//!
//! ```toml
//! scaffold_pattern = "kebab-case"   # lowercase | kebab-case | PascalCase | camelCase
//! ```
//!
//! Loading happens once per invocation, *before* any interactive prompt —
//! a missing artifact is fatal and must abort without asking a single
//! question. The loaded [`NamingConfig`] is then passed down by value; the
//! core never reads configuration from ambient state.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use skema_core::domain::{NamingConfig, NamingPattern};

use crate::error::{CliError, CliResult};

/// File name of the configuration artifact at the project root.
pub const CONFIG_FILE_NAME: &str = "skema.toml";

/// On-disk shape of `skema.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Optional; defaults to kebab-case when omitted.
    pub scaffold_pattern: Option<NamingPattern>,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            scaffold_pattern: Some(NamingPattern::KebabCase),
        }
    }
}

/// The loaded project configuration.
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    pub naming: NamingConfig,
    /// Where the artifact was read from (for display).
    pub path: PathBuf,
}

impl ProjectConfig {
    /// Load the configuration artifact.
    ///
    /// `explicit` is the `--config` override; otherwise the artifact is
    /// expected at `<root>/skema.toml`. Absence is [`CliError::ConfigMissing`].
    pub fn load(explicit: Option<&PathBuf>, root: &Path) -> CliResult<Self> {
        let path = explicit
            .cloned()
            .unwrap_or_else(|| root.join(CONFIG_FILE_NAME));

        if !path.exists() {
            return Err(CliError::ConfigMissing { path });
        }

        let text = std::fs::read_to_string(&path).map_err(|e| CliError::ConfigError {
            message: format!("could not read {}: {e}", path.display()),
            source: Some(Box::new(e)),
        })?;

        let file: ConfigFile = toml::from_str(&text).map_err(|e| CliError::ConfigError {
            message: format!("could not parse {}: {e}", path.display()),
            source: Some(Box::new(e)),
        })?;

        Ok(Self {
            naming: NamingConfig::new(file.scaffold_pattern.unwrap_or_default()),
            path,
        })
    }

    /// Serialised default artifact, written by `skema init`.
    pub fn default_artifact() -> CliResult<String> {
        toml::to_string_pretty(&ConfigFile::default()).map_err(|e| CliError::ConfigError {
            message: format!("could not serialise default config: {e}"),
            source: Some(Box::new(e)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILE_NAME);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn missing_artifact_is_config_missing() {
        let tmp = tempfile::tempdir().unwrap();
        let err = ProjectConfig::load(None, tmp.path()).unwrap_err();
        assert!(matches!(err, CliError::ConfigMissing { .. }));
    }

    #[test]
    fn each_enumerant_parses() {
        let tmp = tempfile::tempdir().unwrap();
        for (text, pattern) in [
            ("lowercase", NamingPattern::Lowercase),
            ("kebab-case", NamingPattern::KebabCase),
            ("PascalCase", NamingPattern::PascalCase),
            ("camelCase", NamingPattern::CamelCase),
        ] {
            write_config(tmp.path(), &format!("scaffold_pattern = \"{text}\"\n"));
            let config = ProjectConfig::load(None, tmp.path()).unwrap();
            assert_eq!(config.naming.pattern, pattern, "for {text}");
        }
    }

    #[test]
    fn omitted_pattern_defaults_to_kebab() {
        let tmp = tempfile::tempdir().unwrap();
        write_config(tmp.path(), "");
        let config = ProjectConfig::load(None, tmp.path()).unwrap();
        assert_eq!(config.naming.pattern, NamingPattern::KebabCase);
    }

    #[test]
    fn unknown_enumerant_is_config_error() {
        let tmp = tempfile::tempdir().unwrap();
        write_config(tmp.path(), "scaffold_pattern = \"SCREAMING\"\n");
        let err = ProjectConfig::load(None, tmp.path()).unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
    }

    #[test]
    fn explicit_path_overrides_root() {
        let tmp = tempfile::tempdir().unwrap();
        let custom = tmp.path().join("elsewhere.toml");
        std::fs::write(&custom, "scaffold_pattern = \"camelCase\"\n").unwrap();

        let config = ProjectConfig::load(Some(&custom), Path::new("/nonexistent")).unwrap();
        assert_eq!(config.naming.pattern, NamingPattern::CamelCase);
        assert_eq!(config.path, custom);
    }

    #[test]
    fn default_artifact_round_trips() {
        let artifact = ProjectConfig::default_artifact().unwrap();
        assert!(artifact.contains("kebab-case"));
        let parsed: ConfigFile = toml::from_str(&artifact).unwrap();
        assert_eq!(parsed.scaffold_pattern, Some(NamingPattern::KebabCase));
    }
}
