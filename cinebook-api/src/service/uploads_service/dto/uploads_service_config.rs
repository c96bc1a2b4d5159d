use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct UploadsServiceConfig {
    pub directory: PathBuf,
    pub max_download_len: usize,
}
