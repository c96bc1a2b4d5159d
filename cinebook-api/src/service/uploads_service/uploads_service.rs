use super::UploadedFile;
use crate::{dto::input, error::Error};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UploadsService: Send + Sync {
    ///
    /// Downloads image and stores it in uploads directory
    ///
    /// ### Returns
    /// name of the stored file
    ///
    /// ### Errors
    /// - [Error::Upload] when link is empty
    /// - [Error::Download] when image could not be downloaded
    ///
    async fn upload_by_link(&self, upload: input::UploadByLink) -> Result<String, Error>;

    ///
    /// Stores files in uploads directory under generated names
    ///
    /// ### Returns
    /// names of the stored files in order of the request
    ///
    /// ### Errors
    /// - [Error::Upload] when there are no files or more than [super::MAX_FILES]
    ///
    async fn upload(&self, files: Vec<UploadedFile>) -> Result<Vec<String>, Error>;
}
