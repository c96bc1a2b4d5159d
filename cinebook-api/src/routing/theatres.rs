use crate::{
    auth::User,
    dto::{input, output},
    error::Error,
    service::{parse_object_id, TheatresService},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use std::sync::Arc;

pub async fn create(
    State(theatres_service): State<Arc<dyn TheatresService>>,
    Extension(user): Extension<User>,
    Json(theatre): Json<input::Theatre>,
) -> Result<(StatusCode, Json<output::Theatre>), Error> {
    let theatre = theatres_service.create(&user, theatre).await?;

    Ok((StatusCode::CREATED, Json(theatre)))
}

pub async fn find_own(
    State(theatres_service): State<Arc<dyn TheatresService>>,
    Extension(user): Extension<User>,
) -> Result<(StatusCode, Json<Vec<output::Theatre>>), Error> {
    let theatres = theatres_service.find_own(&user).await?;

    Ok((StatusCode::OK, Json(theatres)))
}

pub async fn find(
    State(theatres_service): State<Arc<dyn TheatresService>>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<output::Theatre>), Error> {
    let id = parse_object_id(&id)?;
    let theatre = theatres_service.find(id).await?;

    Ok((StatusCode::OK, Json(theatre)))
}

pub async fn update(
    State(theatres_service): State<Arc<dyn TheatresService>>,
    Extension(user): Extension<User>,
    Json(theatre): Json<input::WithId<input::Theatre>>,
) -> Result<(StatusCode, Json<output::Theatre>), Error> {
    let id = parse_object_id(&theatre.id)?;
    let theatre = theatres_service.update(&user, id, theatre.data).await?;

    Ok((StatusCode::OK, Json(theatre)))
}

pub async fn delete(
    State(theatres_service): State<Arc<dyn TheatresService>>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
) -> Result<StatusCode, Error> {
    let id = parse_object_id(&id)?;
    theatres_service.delete(&user, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
