//! Implements the Forge trait for Github
use async_trait::async_trait;
use color_eyre::eyre::eyre;
use log::*;
use octocrab::Octocrab;
use reqwest::StatusCode;
use secrecy::ExposeSecret;
use url::Url;

use crate::{
    error::PerformerError,
    forge::{
        config::RemoteConfig,
        request::{
            CreateFileRequest, GetFileRequest, NotesFile, ReleaseDraft,
            RepositoryHandle, UpdateFileRequest,
        },
        traits::Forge,
    },
    result::Result,
};

const FILE_CONTENT_TYPE: &str = "file";

/// GitHub forge implementation using Octocrab with basic authentication.
pub struct Github {
    config: RemoteConfig,
    instance: Octocrab,
}

impl Github {
    /// Create a GitHub session for github.com, or for the enterprise
    /// instance at `api_url` when one is configured.
    pub fn connect(config: RemoteConfig) -> Result<Self> {
        if config.user.is_empty() {
            return Err(PerformerError::MissingParameter("user").into());
        }

        if config.password.expose_secret().is_empty() {
            return Err(PerformerError::MissingParameter("password").into());
        }

        let base_uri = config.endpoint().trim_end_matches('/').to_string();
        Url::parse(&base_uri).map_err(PerformerError::from)?;

        if config.is_enterprise() {
            info!("connecting to GitHub Enterprise at {base_uri}");
        } else {
            info!("connecting to {base_uri}");
        }

        let instance = Octocrab::builder()
            .basic_auth(
                config.user.clone(),
                config.password.expose_secret().to_string(),
            )
            .base_uri(base_uri)?
            .build()?;

        Ok(Self { config, instance })
    }
}

#[async_trait]
impl Forge for Github {
    fn dry_run(&self) -> bool {
        self.config.dry_run
    }

    async fn get_repository(
        &self,
        owner: &str,
        name: &str,
    ) -> Result<RepositoryHandle> {
        let repo = self.instance.repos(owner, name).get().await?;

        let full_name =
            repo.full_name.unwrap_or_else(|| format!("{owner}/{name}"));

        debug!("resolved repository {full_name}");

        Ok(RepositoryHandle {
            owner: owner.to_string(),
            name: name.to_string(),
            full_name,
        })
    }

    async fn get_file(
        &self,
        repo: &RepositoryHandle,
        req: GetFileRequest,
    ) -> Result<Option<NotesFile>> {
        let handler = self.instance.repos(&repo.owner, &repo.name);
        let mut builder = handler.get_content().path(req.path.clone());

        if let Some(branch) = &req.branch {
            builder = builder.r#ref(branch.clone());
        }

        let path = &req.path;

        match builder.send().await {
            Err(octocrab::Error::GitHub { source, .. })
                if source.status_code == StatusCode::NOT_FOUND =>
            {
                info!("no file found for path: {path}");
                Ok(None)
            }
            Err(err) => Err(eyre!(
                "error getting contents for path: {path}: {err}"
            )),
            Ok(mut data) => {
                let mut items = data.take_items();

                if items.is_empty() {
                    info!("no file found for path: {path}");
                    return Ok(None);
                }

                if items.len() > 1 || items[0].r#type != FILE_CONTENT_TYPE {
                    return Err(eyre!("path is not a file: {path}"));
                }

                let item = items.remove(0);
                let content = item.decoded_content().ok_or_else(|| {
                    eyre!("failed to decode file content for path: {path}")
                })?;

                Ok(Some(NotesFile {
                    path: req.path.clone(),
                    content,
                    sha: item.sha,
                }))
            }
        }
    }

    async fn create_release(
        &self,
        repo: &RepositoryHandle,
        draft: ReleaseDraft,
    ) -> Result<()> {
        let handler = self.instance.repos(&repo.owner, &repo.name);
        let releases = handler.releases();

        let mut builder = releases
            .create(&draft.tag)
            .name(&draft.name)
            .draft(draft.draft)
            .prerelease(draft.prerelease);

        if let Some(commitish) = &draft.commitish {
            builder = builder.target_commitish(commitish);
        }

        if let Some(body) = &draft.body {
            builder = builder.body(body);
        }

        let release = builder.send().await?;

        debug!("created release {}", release.tag_name);

        Ok(())
    }

    async fn update_file(
        &self,
        repo: &RepositoryHandle,
        req: UpdateFileRequest,
    ) -> Result<()> {
        let handler = self.instance.repos(&repo.owner, &repo.name);
        let mut builder = handler.update_file(
            &req.path,
            req.message.clone(),
            req.content.as_bytes(),
            req.sha.clone(),
        );

        if let Some(branch) = &req.branch {
            builder = builder.branch(branch.clone());
        }

        builder.send().await?;

        debug!("updated {} in {}", req.path, repo.full_name);

        Ok(())
    }

    async fn create_file(
        &self,
        repo: &RepositoryHandle,
        req: CreateFileRequest,
    ) -> Result<()> {
        let handler = self.instance.repos(&repo.owner, &repo.name);
        let mut builder = handler.create_file(
            &req.path,
            req.message.clone(),
            req.content.as_bytes(),
        );

        if let Some(branch) = &req.branch {
            builder = builder.branch(branch.clone());
        }

        builder.send().await?;

        debug!("created {} in {}", req.path, repo.full_name);

        Ok(())
    }
}
