//! Traits related to the remote repository host
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::{
    forge::request::{
        CreateFileRequest, GetFileRequest, NotesFile, ReleaseDraft,
        RepositoryHandle, UpdateFileRequest,
    },
    result::Result,
};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait Forge: Send + Sync {
    fn dry_run(&self) -> bool;

    /// Resolves "owner/name", failing if the repository is not accessible.
    async fn get_repository(
        &self,
        owner: &str,
        name: &str,
    ) -> Result<RepositoryHandle>;

    /// Returns `Ok(None)` when the file does not exist.
    async fn get_file(
        &self,
        repo: &RepositoryHandle,
        req: GetFileRequest,
    ) -> Result<Option<NotesFile>>;

    async fn create_release(
        &self,
        repo: &RepositoryHandle,
        draft: ReleaseDraft,
    ) -> Result<()>;

    async fn update_file(
        &self,
        repo: &RepositoryHandle,
        req: UpdateFileRequest,
    ) -> Result<()>;

    async fn create_file(
        &self,
        repo: &RepositoryHandle,
        req: CreateFileRequest,
    ) -> Result<()>;
}
