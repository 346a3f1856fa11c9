//! Common test helper functions shared across test modules.
use secrecy::SecretString;

use crate::{
    forge::request::{NotesFile, RepositoryHandle},
    notes::NotesTemplate,
    resolver::ReleaseRequest,
};

pub const TEST_OWNER: &str = "Ontotext-AD";
pub const TEST_REPOSITORY: &str = "release-test";
pub const TEST_TAG: &str = "1.0.0";
pub const TEST_BRANCH: &str = "master";
pub const TEST_NOTES_FILE: &str = "RELEASE-NOTES.md";
pub const TEST_SHA: &str = "3d21ec53a331a6f037a91c368710b99387d012c1";

/// Notes file with a drafted next release above the separator.
pub const TEST_NOTES: &str = "Next release
============

### New features

* [GDB-101](https://jira.ontotext.com/browse/GDB-101): Faster imports

### Bug fixes

* [GDB-102](https://jira.ontotext.com/browse/GDB-102): Crash on startup

###################

0.9.0
============

### New features

* [GDB-90](https://jira.ontotext.com/browse/GDB-90): First feature
";

/// Creates a fully populated ReleaseRequest.
///
/// # Example
/// ```ignore
/// let request = ReleaseRequest {
///     tag: None,
///     ..create_test_request()
/// };
/// ```
pub fn create_test_request() -> ReleaseRequest {
    ReleaseRequest {
        api_url: Some("http://localhost:1080".into()),
        user: Some("test-user".into()),
        password: Some(SecretString::from("test-pass".to_string())),
        owner: Some(TEST_OWNER.into()),
        repository: Some(TEST_REPOSITORY.into()),
        tag: Some(TEST_TAG.into()),
        branch: Some(TEST_BRANCH.into()),
        notes_file: Some(TEST_NOTES_FILE.into()),
        template: NotesTemplate::default(),
        dry_run: false,
    }
}

pub fn create_test_repository() -> RepositoryHandle {
    RepositoryHandle {
        owner: TEST_OWNER.into(),
        name: TEST_REPOSITORY.into(),
        full_name: format!("{TEST_OWNER}/{TEST_REPOSITORY}"),
    }
}

/// Creates a NotesFile at `path` holding [`TEST_NOTES`].
pub fn create_test_notes_file(path: &str) -> NotesFile {
    NotesFile {
        path: path.into(),
        content: TEST_NOTES.into(),
        sha: TEST_SHA.into(),
    }
}
