use crate::{
    auth::User,
    dto::{input, output},
    error::Error,
    service::{parse_object_id, MoviesService},
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use std::sync::Arc;

pub async fn find_all(
    State(movies_service): State<Arc<dyn MoviesService>>,
) -> Result<(StatusCode, Json<Vec<output::Movie>>), Error> {
    let movies = movies_service.find_all().await?;

    Ok((StatusCode::OK, Json(movies)))
}

pub async fn search(
    State(movies_service): State<Arc<dyn MoviesService>>,
    Query(query): Query<input::SearchQuery>,
) -> Result<(StatusCode, Json<Vec<output::Movie>>), Error> {
    let movies = movies_service.search(query.query).await?;

    Ok((StatusCode::OK, Json(movies)))
}

pub async fn create(
    State(movies_service): State<Arc<dyn MoviesService>>,
    Extension(user): Extension<User>,
    Json(movie): Json<input::Movie>,
) -> Result<(StatusCode, Json<output::Movie>), Error> {
    let movie = movies_service.create(&user, movie).await?;

    Ok((StatusCode::CREATED, Json(movie)))
}

pub async fn find_own(
    State(movies_service): State<Arc<dyn MoviesService>>,
    Extension(user): Extension<User>,
) -> Result<(StatusCode, Json<Vec<output::Movie>>), Error> {
    let movies = movies_service.find_own(&user).await?;

    Ok((StatusCode::OK, Json(movies)))
}

pub async fn find(
    State(movies_service): State<Arc<dyn MoviesService>>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<output::Movie>), Error> {
    let id = parse_object_id(&id)?;
    let movie = movies_service.find(id).await?;

    Ok((StatusCode::OK, Json(movie)))
}

pub async fn update(
    State(movies_service): State<Arc<dyn MoviesService>>,
    Extension(user): Extension<User>,
    Json(movie): Json<input::WithId<input::Movie>>,
) -> Result<(StatusCode, Json<output::Movie>), Error> {
    let id = parse_object_id(&movie.id)?;
    let movie = movies_service.update(&user, id, movie.data).await?;

    Ok((StatusCode::OK, Json(movie)))
}

pub async fn delete(
    State(movies_service): State<Arc<dyn MoviesService>>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
) -> Result<StatusCode, Error> {
    let id = parse_object_id(&id)?;
    movies_service.delete(&user, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
