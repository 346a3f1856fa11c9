/// Repository resolved by owner and name; passed to every later call.
#[derive(Debug, Clone, PartialEq)]
pub struct RepositoryHandle {
    pub owner: String,
    pub name: String,
    /// "owner/name" as reported by the API.
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq)]
/// Request to read a file on a branch.
pub struct GetFileRequest {
    pub path: String,
    /// Default branch when unset.
    pub branch: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
/// Current state of a remote notes file.
pub struct NotesFile {
    pub path: String,
    /// Decoded file content.
    pub content: String,
    /// Blob sha required to update the file.
    pub sha: String,
}

#[derive(Debug, Clone, PartialEq)]
/// Release to create, sent exactly once.
pub struct ReleaseDraft {
    pub tag: String,
    pub name: String,
    /// Default branch when unset.
    pub commitish: Option<String>,
    pub body: Option<String>,
    pub draft: bool,
    pub prerelease: bool,
}

impl ReleaseDraft {
    /// Published, non-prerelease draft named after its tag.
    pub fn new(
        tag: &str,
        commitish: Option<&str>,
        body: Option<String>,
    ) -> Self {
        Self {
            tag: tag.to_string(),
            name: tag.to_string(),
            commitish: commitish.map(String::from),
            body,
            draft: false,
            prerelease: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Request to overwrite an existing file.
pub struct UpdateFileRequest {
    pub path: String,
    pub branch: Option<String>,
    pub message: String,
    pub content: String,
    /// Blob sha of the version being replaced.
    pub sha: String,
}

#[derive(Debug, Clone, PartialEq)]
/// Request to create a file that does not exist yet.
pub struct CreateFileRequest {
    pub path: String,
    pub branch: Option<String>,
    pub message: String,
    pub content: String,
}
