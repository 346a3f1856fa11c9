//! CLI argument parsing.
use clap::Parser;
use std::path::PathBuf;

use crate::{config::StepConfig, macros::parse_definition, result::Result};

/// Publishes a GitHub release from the "next release" section of a release
/// notes file, then rotates the notes file for the next cycle.
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long)]
    /// Configuration file. Defaults to release-performer.toml when present.
    pub config: Option<PathBuf>,

    #[arg(long)]
    /// GitHub Enterprise API url, e.g. https://github.example.com/api/v3.
    pub api_url: Option<String>,

    #[arg(long)]
    /// User for basic authentication. Falls back to GITHUB_USER env var.
    pub user: Option<String>,

    #[arg(long)]
    /// Password for basic authentication. Falls back to GITHUB_PASSWORD env
    /// var.
    pub password: Option<String>,

    #[arg(long)]
    /// Repository owner.
    pub owner: Option<String>,

    #[arg(long)]
    /// Repository name.
    pub repository: Option<String>,

    #[arg(long)]
    /// Tag and name of the release to create.
    pub tag: Option<String>,

    #[arg(long)]
    /// Branch to release from and to rotate the notes file on.
    pub branch: Option<String>,

    #[arg(long)]
    /// Release notes file path relative to the repository root.
    pub release_notes_file: Option<String>,

    #[arg(long)]
    /// Base url for ticket links in the fresh release notes template.
    pub ticket_url: Option<String>,

    #[arg(short = 'D', long = "define", value_name = "KEY=VALUE")]
    /// Build variable available to macros. May be repeated.
    pub definitions: Vec<String>,

    #[arg(long, default_value_t = false)]
    /// Log the release and notes changes without performing them.
    pub dry_run: bool,

    #[arg(long, default_value_t = false)]
    /// Enable debug logging.
    pub debug: bool,
}

impl Args {
    /// Step configuration given on the command line.
    pub fn step_config(&self) -> StepConfig {
        StepConfig {
            api_url: self.api_url.clone(),
            user: self.user.clone(),
            password: self.password.clone(),
            owner: self.owner.clone(),
            repository: self.repository.clone(),
            tag: self.tag.clone(),
            branch: self.branch.clone(),
            release_notes_file: self.release_notes_file.clone(),
            ticket_url: self.ticket_url.clone(),
            notes_template: None,
            dry_run: self.dry_run,
        }
    }

    /// Parsed `--define` pairs.
    pub fn definitions(&self) -> Result<Vec<(String, String)>> {
        self.definitions
            .iter()
            .map(|raw| parse_definition(raw))
            .collect()
    }
}
