//! Turns the literal step configuration into a resolved release request.
use log::*;
use secrecy::SecretString;

use crate::{
    config::StepConfig,
    error::PerformerError,
    forge::config::RemoteConfig,
    macros::MacroExpander,
    notes::{DEFAULT_NOTES_TEMPLATE, DEFAULT_TICKET_URL, NotesTemplate},
    result::Result,
};

/// Fully resolved parameters for one release.
#[derive(Debug, Clone)]
pub struct ReleaseRequest {
    pub api_url: Option<String>,
    pub user: Option<String>,
    pub password: Option<SecretString>,
    pub owner: Option<String>,
    pub repository: Option<String>,
    pub tag: Option<String>,
    pub branch: Option<String>,
    pub notes_file: Option<String>,
    pub template: NotesTemplate,
    pub dry_run: bool,
}

impl ReleaseRequest {
    /// Session configuration; user and password are required.
    pub fn remote_config(&self) -> Result<RemoteConfig> {
        let user = self
            .user
            .clone()
            .ok_or(PerformerError::MissingParameter("user"))?;
        let password = self
            .password
            .clone()
            .ok_or(PerformerError::MissingParameter("password"))?;

        Ok(RemoteConfig {
            api_url: self.api_url.clone(),
            user,
            password,
            dry_run: self.dry_run,
        })
    }

    /// "endpoint/owner/repository" for log messages.
    pub fn target(&self) -> String {
        format!(
            "{}/{}/{}",
            self.api_url.as_deref().unwrap_or_default(),
            self.owner.as_deref().unwrap_or_default(),
            self.repository.as_deref().unwrap_or_default()
        )
    }
}

/// Expands every configured value against the build and normalizes blanks
/// to absent values.
///
/// Expansion stops at the first failure: the failing value and all values
/// after it keep their literal form.
pub fn resolve(
    expander: &dyn MacroExpander,
    config: &StepConfig,
) -> ReleaseRequest {
    let mut resolved = config.clone();

    if let Err(err) = expand_all(expander, &mut resolved) {
        error!("Unable to resolve macro [{err}]");
    }

    let template = NotesTemplate {
        template: resolved
            .notes_template
            .clone()
            .unwrap_or_else(|| DEFAULT_NOTES_TEMPLATE.into()),
        ticket_url: fix_empty_and_trim(resolved.ticket_url.clone())
            .unwrap_or_else(|| DEFAULT_TICKET_URL.into()),
    };

    ReleaseRequest {
        api_url: fix_empty_and_trim(resolved.api_url),
        user: fix_empty(resolved.user),
        password: fix_empty(resolved.password).map(SecretString::from),
        owner: fix_empty_and_trim(resolved.owner),
        repository: fix_empty_and_trim(resolved.repository),
        tag: fix_empty_and_trim(resolved.tag),
        branch: fix_empty_and_trim(resolved.branch),
        notes_file: fix_empty_and_trim(resolved.release_notes_file),
        template,
        dry_run: resolved.dry_run,
    }
}

fn expand_all(
    expander: &dyn MacroExpander,
    config: &mut StepConfig,
) -> Result<()> {
    let fields = [
        &mut config.user,
        &mut config.password,
        &mut config.repository,
        &mut config.owner,
        &mut config.tag,
        &mut config.branch,
        &mut config.release_notes_file,
        &mut config.api_url,
    ];

    for field in fields {
        if let Some(value) = field.as_deref() {
            let expanded = expander.expand(value)?;
            *field = Some(expanded);
        }
    }

    Ok(())
}

fn fix_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn fix_empty_and_trim(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
