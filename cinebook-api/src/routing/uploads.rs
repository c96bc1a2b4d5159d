use crate::{
    dto::input,
    error::Error,
    service::{UploadedFile, UploadsService},
};
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

const PHOTOS_FIELD: &str = "photos";

pub async fn upload_by_link(
    State(uploads_service): State<Arc<dyn UploadsService>>,
    Json(upload): Json<input::UploadByLink>,
) -> Result<(StatusCode, Json<String>), Error> {
    let name = uploads_service.upload_by_link(upload).await?;

    Ok((StatusCode::OK, Json(name)))
}

pub async fn upload(
    State(uploads_service): State<Arc<dyn UploadsService>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<Vec<String>>), Error> {
    let mut files = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| Error::Upload(err.body_text()))?
    {
        if field.name() != Some(PHOTOS_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content = field
            .bytes()
            .await
            .map_err(|err| Error::Upload(err.body_text()))?;
        files.push(UploadedFile { file_name, content });
    }

    let names = uploads_service.upload(files).await?;

    Ok((StatusCode::OK, Json(names)))
}
