use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UploadByLink {
    pub link: String,
}
