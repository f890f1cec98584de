//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/rolo/rolo.toml`
//! 3. Environment variables: `ROLO_*` prefix
//! 4. The `--file` flag, applied by the CLI layer

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Unified configuration for rolo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Contacts file used when no `--file` flag is given
    pub contacts_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            contacts_file: default_contacts_file(),
        }
    }
}

/// Contacts file in the platform data directory, `./contacts.txt` when no
/// home directory can be determined.
fn default_contacts_file() -> PathBuf {
    ProjectDirs::from("", "", "rolo")
        .map(|dirs| dirs.data_dir().join("contacts.txt"))
        .unwrap_or_else(|| PathBuf::from("contacts.txt"))
}

/// XDG config directory for rolo.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "rolo").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Path of the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("rolo.toml"))
}

impl Settings {
    /// Load settings with layered precedence.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings from an explicit config file path (used by tests).
    pub fn load_from(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default(
                "contacts_file",
                defaults.contacts_file.to_string_lossy().to_string(),
            )
            .map_err(config_err)?;

        // 2. Merge the config file when present
        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path.to_path_buf()).required(false));
        }

        // 3. Apply ROLO_* environment variables as explicit overrides
        builder = builder.add_source(Environment::with_prefix("ROLO"));

        let mut settings: Self = builder
            .build()
            .map_err(config_err)?
            .try_deserialize()
            .map_err(config_err)?;

        // Expand ~ and $VAR in path-like fields
        settings.expand_paths();

        Ok(settings)
    }

    fn expand_paths(&mut self) {
        self.contacts_file = PathBuf::from(expand_env_vars(
            self.contacts_file.to_string_lossy().as_ref(),
        ));
    }

    /// Commented TOML template for `config init`.
    pub fn template() -> String {
        r#"# rolo configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/rolo/rolo.toml    (this file)
#   Env:    ROLO_* environment variables (explicit overrides)
#   Flag:   --file FILE                  (per invocation)

# Contacts file used when no --file flag is given
# contacts_file = "~/contacts.txt"
"#
        .to_string()
    }
}

/// Expand `~` and `$VAR` with shellexpand, leaving the input unchanged when a
/// variable is undefined.
fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|expanded| expanded.to_string())
        .unwrap_or_else(|_| path.to_string())
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_comment_only_template_when_parsing_then_yields_defaults() {
        let settings: Settings = toml::from_str(&Settings::template()).unwrap();

        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn given_no_home_fallback_when_defaulting_then_file_is_named_contacts() {
        let path = default_contacts_file();

        assert_eq!(path.file_name().unwrap(), "contacts.txt");
    }
}
