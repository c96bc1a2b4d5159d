use axum::body::Bytes;

///
/// File received in multipart request
///
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: Option<String>,
    pub content: Bytes,
}
