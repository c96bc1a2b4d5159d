use crate::{
    auth::User,
    dto::output,
    error::Error,
    service::{parse_object_id, AdminRequestsService},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use std::sync::Arc;

pub async fn create_list(
    State(admin_requests_service): State<Arc<dyn AdminRequestsService>>,
) -> Result<(StatusCode, Json<output::AdminRequestList>), Error> {
    let list = admin_requests_service.create_list().await?;

    Ok((StatusCode::OK, Json(list)))
}

pub async fn find(
    State(admin_requests_service): State<Arc<dyn AdminRequestsService>>,
    Extension(user): Extension<User>,
) -> Result<(StatusCode, Json<output::AdminRequestList>), Error> {
    let list = admin_requests_service.find(&user).await?;

    Ok((StatusCode::OK, Json(list)))
}

pub async fn add(
    State(admin_requests_service): State<Arc<dyn AdminRequestsService>>,
    Extension(user): Extension<User>,
    Path(user_id): Path<String>,
) -> Result<(StatusCode, Json<output::AdminRequestList>), Error> {
    let user_id = parse_object_id(&user_id)?;
    let list = admin_requests_service.add(&user, user_id).await?;

    Ok((StatusCode::OK, Json(list)))
}

pub async fn remove(
    State(admin_requests_service): State<Arc<dyn AdminRequestsService>>,
    Extension(user): Extension<User>,
    Path(user_id): Path<String>,
) -> Result<(StatusCode, Json<output::AdminRequestList>), Error> {
    let user_id = parse_object_id(&user_id)?;
    let list = admin_requests_service.remove(&user, user_id).await?;

    Ok((StatusCode::OK, Json(list)))
}
