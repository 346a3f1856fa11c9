//! Configuration loading for `release-performer.toml` files.
//!
//! Every value may also be given on the command line; command line values
//! win field by field.
use log::*;
use merge::Merge;
use serde::Deserialize;
use std::{env, fs, path::Path};

use crate::{error::PerformerError, result::Result};

/// Default configuration filename, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "release-performer.toml";
/// Environment variable used when no user is configured.
pub const USER_ENV_VAR: &str = "GITHUB_USER";
/// Environment variable used when no password is configured.
pub const PASSWORD_ENV_VAR: &str = "GITHUB_PASSWORD";

/// Literal step configuration, before macro expansion.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Merge)]
#[serde(default)]
pub struct StepConfig {
    /// GitHub Enterprise API url; github.com when unset.
    #[merge(strategy = merge::option::overwrite_none)]
    pub api_url: Option<String>,
    #[merge(strategy = merge::option::overwrite_none)]
    pub user: Option<String>,
    #[merge(strategy = merge::option::overwrite_none)]
    pub password: Option<String>,
    /// Repository owner (user or organization).
    #[merge(strategy = merge::option::overwrite_none)]
    pub owner: Option<String>,
    #[merge(strategy = merge::option::overwrite_none)]
    pub repository: Option<String>,
    /// Tag to create; also used as the release name.
    #[merge(strategy = merge::option::overwrite_none)]
    pub tag: Option<String>,
    /// Branch the release targets and the notes file lives on.
    #[merge(strategy = merge::option::overwrite_none)]
    pub branch: Option<String>,
    /// Path of the release notes file relative to the repository root.
    #[merge(strategy = merge::option::overwrite_none)]
    pub release_notes_file: Option<String>,
    /// Base url for ticket links in the fresh notes template.
    #[merge(strategy = merge::option::overwrite_none)]
    pub ticket_url: Option<String>,
    /// Tera template replacing the default fresh notes section.
    #[merge(strategy = merge::option::overwrite_none)]
    pub notes_template: Option<String>,
    /// Log writes instead of performing them.
    #[merge(strategy = merge::bool::overwrite_false)]
    pub dry_run: bool,
}

impl StepConfig {
    /// Parses a TOML document.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: StepConfig =
            toml::from_str(content).map_err(PerformerError::from)?;
        Ok(config)
    }

    /// Loads the configuration file at `path`, or the default file if it
    /// exists. An explicit path that cannot be read is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            let content = fs::read_to_string(path).map_err(|err| {
                PerformerError::invalid_config(format!(
                    "unable to read {}: {err}",
                    path.display()
                ))
            })?;
            info!("loaded configuration from {}", path.display());
            return Self::from_toml(&content);
        }

        let default_path = Path::new(DEFAULT_CONFIG_FILE);

        if let Ok(content) = fs::read_to_string(default_path) {
            info!("loaded configuration from {DEFAULT_CONFIG_FILE}");
            return Self::from_toml(&content);
        }

        debug!("no configuration file found: using command line values");
        Ok(Self::default())
    }

    /// Fills missing credentials from the environment.
    pub fn with_env_credentials(mut self) -> Self {
        if self.user.is_none() {
            self.user = env::var(USER_ENV_VAR).ok();
        }
        if self.password.is_none() {
            self.password = env::var(PASSWORD_ENV_VAR).ok();
        }
        self
    }
}
