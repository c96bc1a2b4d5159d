use super::{UploadedFile, UploadsService, UploadsServiceConfig};
use crate::{dto::input, error::Error};
use anyhow::Context;
use axum::async_trait;
use std::path::Path;
use time::OffsetDateTime;
use uuid::Uuid;

pub const MAX_FILES: usize = 10;
const MAX_EXTENSION_LEN: usize = 8;

pub struct UploadsServiceImpl {
    config: UploadsServiceConfig,
    client: reqwest::Client,
}

impl UploadsServiceImpl {
    pub fn new(config: UploadsServiceConfig, client: reqwest::Client) -> Self {
        Self { config, client }
    }

    ///
    /// Keeps extension only when it is short and alphanumeric
    ///
    fn sanitize_extension(file_name: Option<&str>) -> Option<String> {
        let extension = Path::new(file_name?).extension()?.to_str()?;
        let valid = !extension.is_empty()
            && extension.len() <= MAX_EXTENSION_LEN
            && extension.chars().all(|c| c.is_ascii_alphanumeric());

        valid.then(|| extension.to_ascii_lowercase())
    }

    fn generated_name(file_name: Option<&str>) -> String {
        let id = Uuid::new_v4().simple();
        match Self::sanitize_extension(file_name) {
            Some(extension) => format!("{id}.{extension}"),
            None => id.to_string(),
        }
    }

    fn check_len(&self, len: usize) -> Result<(), Error> {
        if len > self.config.max_download_len {
            return Err(Error::Download(format!(
                "image exceeds {} bytes",
                self.config.max_download_len
            )));
        }

        Ok(())
    }

    ///
    /// Reads the response in chunks so that a body without
    /// content-length cannot grow past the limit
    ///
    async fn download(&self, link: &str) -> Result<Vec<u8>, Error> {
        let mut response = self
            .client
            .get(link)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| Error::Download(err.to_string()))?;

        if let Some(len) = response.content_length() {
            self.check_len(usize::try_from(len).unwrap_or(usize::MAX))?;
        }

        let mut content = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|err| Error::Download(err.to_string()))?
        {
            self.check_len(content.len() + chunk.len())?;
            content.extend_from_slice(&chunk);
        }

        Ok(content)
    }

    async fn store(&self, name: &str, content: &[u8]) -> Result<(), Error> {
        tokio::fs::create_dir_all(&self.config.directory)
            .await
            .context("failed to create uploads directory")?;

        let path = self.config.directory.join(name);
        tokio::fs::write(&path, content)
            .await
            .with_context(|| format!("failed to write {}", path.display()))?;

        Ok(())
    }
}

#[async_trait]
impl UploadsService for UploadsServiceImpl {
    async fn upload_by_link(&self, upload: input::UploadByLink) -> Result<String, Error> {
        tracing::info!("uploading image by link");
        tracing::trace!(?upload);

        let link = upload.link.trim();
        if link.is_empty() {
            return Err(Error::Upload("link is required".to_string()));
        }

        let content = self.download(link).await?;

        let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
        let name = format!("photo{millis}.jpg");
        self.store(&name, &content).await?;

        tracing::info!(%name, size = content.len(), "uploaded image by link");

        Ok(name)
    }

    async fn upload(&self, files: Vec<UploadedFile>) -> Result<Vec<String>, Error> {
        tracing::info!(count = files.len(), "uploading files");

        if files.is_empty() {
            return Err(Error::Upload("no files".to_string()));
        }
        if files.len() > MAX_FILES {
            return Err(Error::Upload(format!("at most {MAX_FILES} files allowed")));
        }

        let mut names = Vec::with_capacity(files.len());
        for file in files {
            let name = Self::generated_name(file.file_name.as_deref());
            self.store(&name, &file.content).await?;
            names.push(name);
        }

        tracing::info!(?names, "uploaded files");

        Ok(names)
    }
}
