//! The release build step: resolve parameters, connect, publish the release
//! and rotate the release notes file.
//!
//! Every stage logs its own failure and hands a plain "did not succeed"
//! signal to the next one. Nothing here ever fails the surrounding build.
use log::*;

use crate::{
    config::StepConfig,
    error::PerformerError,
    forge::{
        github::Github,
        manager::ForgeManager,
        request::{
            CreateFileRequest, GetFileRequest, NotesFile, ReleaseDraft,
            RepositoryHandle, UpdateFileRequest,
        },
    },
    macros::MacroExpander,
    notes,
    resolver::{self, ReleaseRequest},
};

/// How far a release request got.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No release was attempted: the repository could not be resolved.
    Aborted,
    /// The release could not be created; notes were left untouched.
    ReleaseFailed,
    Released { notes_rewritten: bool },
}

/// Runs the release step. Always returns `true`: GitHub problems are
/// reported in the log only.
pub async fn perform(
    expander: &dyn MacroExpander,
    config: &StepConfig,
) -> bool {
    let request = resolver::resolve(expander, config);

    let session = request.remote_config().and_then(Github::connect);

    match session {
        Ok(github) => {
            let forge = ForgeManager::new(Box::new(github));
            perform_with(&forge, &request).await
        }
        Err(err) => {
            error!(
                "Unable to connect to repository [{}], [{err}]",
                request.target()
            );
            true
        }
    }
}

/// Runs the release step over an established session. Always returns
/// `true`, whatever the outcome.
pub async fn perform_with(
    forge: &ForgeManager,
    request: &ReleaseRequest,
) -> bool {
    let outcome = execute(forge, request).await;
    debug!("release step finished: {outcome:?}");
    true
}

/// Runs every stage after the session has been established.
pub async fn execute(
    forge: &ForgeManager,
    request: &ReleaseRequest,
) -> Outcome {
    let Some(repo) = open_repository(forge, request).await else {
        return Outcome::Aborted;
    };

    let current_notes = read_notes(forge, &repo, request).await;

    if !create_release(forge, &repo, current_notes.as_ref(), request).await {
        return Outcome::ReleaseFailed;
    }

    let notes_rewritten =
        rewrite_notes(forge, &repo, current_notes.as_ref(), request).await;

    Outcome::Released { notes_rewritten }
}

async fn open_repository(
    forge: &ForgeManager,
    request: &ReleaseRequest,
) -> Option<RepositoryHandle> {
    let (Some(owner), Some(name)) =
        (request.owner.as_deref(), request.repository.as_deref())
    else {
        let missing = if request.owner.is_none() {
            "owner"
        } else {
            "repository"
        };
        error!(
            "Unable to connect to repository [{}], [{}]",
            request.target(),
            PerformerError::MissingParameter(missing)
        );
        return None;
    };

    match forge.get_repository(owner, name).await {
        Ok(repo) => Some(repo),
        Err(err) => {
            error!(
                "Unable to connect to repository [{}], [{err}]",
                request.target()
            );
            None
        }
    }
}

/// Fetches the current notes file. Not found and fetch errors both yield
/// `None`.
async fn read_notes(
    forge: &ForgeManager,
    repo: &RepositoryHandle,
    request: &ReleaseRequest,
) -> Option<NotesFile> {
    let Some(path) = request.notes_file.clone() else {
        error!(
            "Unable to find file [], [{}]",
            PerformerError::MissingParameter("release notes file")
        );
        return None;
    };

    let req = GetFileRequest {
        path: path.clone(),
        branch: request.branch.clone(),
    };

    match forge.get_file(repo, req).await {
        Ok(Some(file)) => {
            info!("found release notes {path} in {}", repo.full_name);
            Some(file)
        }
        Ok(None) => {
            error!("Unable to find file [{path}], [file does not exist]");
            None
        }
        Err(err) => {
            error!("Unable to find file [{path}], [{err}]");
            None
        }
    }
}

/// Publishes the release; the body is the notes file's "next release"
/// section when one can be extracted.
async fn create_release(
    forge: &ForgeManager,
    repo: &RepositoryHandle,
    current_notes: Option<&NotesFile>,
    request: &ReleaseRequest,
) -> bool {
    let Some(tag) = request.tag.as_deref() else {
        error!(
            "Unable to create release, [{}]",
            PerformerError::MissingParameter("tag")
        );
        return false;
    };

    let body = current_notes
        .and_then(|file| notes::extract_next_release(&file.content, tag));

    if current_notes.is_some() && body.is_none() {
        warn!("no separator in release notes: creating release without body");
    }

    let draft = ReleaseDraft::new(tag, request.branch.as_deref(), body);

    match forge.create_release(repo, draft).await {
        Ok(()) => {
            info!("{}", release_message(tag, forge.dry_run()));
            true
        }
        Err(err) => {
            error!("Unable to create release, [{err}]");
            false
        }
    }
}

/// Rotates an existing notes file, or creates one from the template.
async fn rewrite_notes(
    forge: &ForgeManager,
    repo: &RepositoryHandle,
    current_notes: Option<&NotesFile>,
    request: &ReleaseRequest,
) -> bool {
    let path = request.notes_file.clone().unwrap_or_default();
    // guarded by create_release
    let tag = request.tag.clone().unwrap_or_default();

    let operation = if current_notes.is_some() {
        "update"
    } else {
        "create"
    };

    if path.is_empty() {
        error!(
            "Unable to {operation} release note file [], [{}]",
            PerformerError::MissingParameter("release notes file")
        );
        return false;
    }

    let fresh = match request.template.render() {
        Ok(fresh) => fresh,
        Err(err) => {
            error!("Unable to {operation} release note file [{path}], [{err}]");
            return false;
        }
    };

    let message = notes::commit_message(&path, &tag);

    let result = match current_notes {
        Some(file) => {
            let req = UpdateFileRequest {
                path: file.path.clone(),
                branch: request.branch.clone(),
                message,
                content: notes::rotate(&fresh, &file.content, &tag),
                sha: file.sha.clone(),
            };
            forge.update_file(repo, req).await
        }
        None => {
            let req = CreateFileRequest {
                path: path.clone(),
                branch: request.branch.clone(),
                message,
                content: notes::initial(&fresh),
            };
            forge.create_file(repo, req).await
        }
    };

    match result {
        Ok(()) => {
            info!("{}", notes_message(&path, forge.dry_run()));
            true
        }
        Err(err) => {
            error!("Unable to {operation} release note file [{path}], [{err}]");
            false
        }
    }
}

fn release_message(tag: &str, dry_run: bool) -> String {
    if dry_run {
        format!("dry_run: release [{tag}] was not created")
    } else {
        format!("Release created successfully [{tag}]")
    }
}

fn notes_message(path: &str, dry_run: bool) -> String {
    if dry_run {
        format!("dry_run: release notes {path} were not rewritten")
    } else {
        format!("Release notes {path} ready for the next release")
    }
}
