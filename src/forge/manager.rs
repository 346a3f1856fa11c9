//! Manager that wraps forge implementations
use log::*;

use crate::{
    forge::{
        request::{
            CreateFileRequest, GetFileRequest, NotesFile, ReleaseDraft,
            RepositoryHandle, UpdateFileRequest,
        },
        traits::Forge,
    },
    result::Result,
};

/// Routes calls to a forge, skipping writes in dry-run mode.
pub struct ForgeManager {
    forge: Box<dyn Forge>,
    dry_run: bool,
}

impl ForgeManager {
    pub fn new(forge: Box<dyn Forge>) -> Self {
        let dry_run = forge.dry_run();
        Self { forge, dry_run }
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    pub async fn get_repository(
        &self,
        owner: &str,
        name: &str,
    ) -> Result<RepositoryHandle> {
        debug!("resolving repository {owner}/{name}");
        self.forge.get_repository(owner, name).await
    }

    pub async fn get_file(
        &self,
        repo: &RepositoryHandle,
        req: GetFileRequest,
    ) -> Result<Option<NotesFile>> {
        debug!(
            "fetching {} from {} on branch [{:?}]",
            req.path, repo.full_name, req.branch
        );
        self.forge.get_file(repo, req).await
    }

    pub async fn create_release(
        &self,
        repo: &RepositoryHandle,
        draft: ReleaseDraft,
    ) -> Result<()> {
        if self.dry_run {
            warn!("dry_run: would create release: draft: {:#?}", draft);
            return Ok(());
        }
        self.forge.create_release(repo, draft).await
    }

    pub async fn update_file(
        &self,
        repo: &RepositoryHandle,
        req: UpdateFileRequest,
    ) -> Result<()> {
        if self.dry_run {
            warn!("dry_run: would update file: req: {:#?}", req);
            return Ok(());
        }
        self.forge.update_file(repo, req).await
    }

    pub async fn create_file(
        &self,
        repo: &RepositoryHandle,
        req: CreateFileRequest,
    ) -> Result<()> {
        if self.dry_run {
            warn!("dry_run: would create file: req: {:#?}", req);
            return Ok(());
        }
        self.forge.create_file(repo, req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{forge::traits::MockForge, test_helpers::*};

    #[tokio::test]
    async fn dry_run_prevents_create_release() {
        let mut mock_forge = MockForge::new();
        mock_forge.expect_dry_run().returning(|| true);
        mock_forge.expect_create_release().times(0);

        let manager = ForgeManager::new(Box::new(mock_forge));
        let draft = ReleaseDraft::new(TEST_TAG, Some(TEST_BRANCH), None);

        manager
            .create_release(&create_test_repository(), draft)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn dry_run_prevents_file_writes() {
        let mut mock_forge = MockForge::new();
        mock_forge.expect_dry_run().returning(|| true);
        mock_forge.expect_update_file().times(0);
        mock_forge.expect_create_file().times(0);

        let manager = ForgeManager::new(Box::new(mock_forge));
        let repo = create_test_repository();

        manager
            .update_file(
                &repo,
                UpdateFileRequest {
                    path: TEST_NOTES_FILE.into(),
                    branch: Some(TEST_BRANCH.into()),
                    message: "message".into(),
                    content: "content".into(),
                    sha: TEST_SHA.into(),
                },
            )
            .await
            .unwrap();

        manager
            .create_file(
                &repo,
                CreateFileRequest {
                    path: TEST_NOTES_FILE.into(),
                    branch: Some(TEST_BRANCH.into()),
                    message: "message".into(),
                    content: "content".into(),
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn dry_run_still_reads() {
        let mut mock_forge = MockForge::new();
        mock_forge.expect_dry_run().returning(|| true);
        mock_forge
            .expect_get_repository()
            .times(1)
            .returning(|_, _| Ok(create_test_repository()));
        mock_forge
            .expect_get_file()
            .times(1)
            .returning(|_, req| Ok(Some(create_test_notes_file(&req.path))));

        let manager = ForgeManager::new(Box::new(mock_forge));
        assert!(manager.dry_run());

        let repo = manager
            .get_repository(TEST_OWNER, TEST_REPOSITORY)
            .await
            .unwrap();
        let file = manager
            .get_file(
                &repo,
                GetFileRequest {
                    path: TEST_NOTES_FILE.into(),
                    branch: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(file.unwrap().path, TEST_NOTES_FILE);
    }

    #[tokio::test]
    async fn forwards_writes_when_not_dry_run() {
        let mut mock_forge = MockForge::new();
        mock_forge.expect_dry_run().returning(|| false);
        mock_forge
            .expect_create_release()
            .times(1)
            .withf(|repo, draft| {
                repo.full_name == "Ontotext-AD/release-test"
                    && draft.tag == TEST_TAG
            })
            .returning(|_, _| Ok(()));

        let manager = ForgeManager::new(Box::new(mock_forge));
        let draft = ReleaseDraft::new(TEST_TAG, None, None);

        manager
            .create_release(&create_test_repository(), draft)
            .await
            .unwrap();
    }
}
