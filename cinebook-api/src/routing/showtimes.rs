use crate::{
    auth::User,
    dto::{input, output},
    error::Error,
    service::{parse_object_id, ShowtimesService},
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use std::sync::Arc;

pub async fn create(
    State(showtimes_service): State<Arc<dyn ShowtimesService>>,
    Extension(user): Extension<User>,
    Json(showtime): Json<input::Showtime>,
) -> Result<(StatusCode, Json<output::Showtime>), Error> {
    let showtime = showtimes_service.create(&user, showtime).await?;

    Ok((StatusCode::CREATED, Json(showtime)))
}

pub async fn check(
    State(showtimes_service): State<Arc<dyn ShowtimesService>>,
    Query(query): Query<input::ShowtimeCheckQuery>,
) -> Result<(StatusCode, Json<output::ShowtimeExists>), Error> {
    let exists = showtimes_service.check(query).await?;

    Ok((StatusCode::OK, Json(exists)))
}

pub async fn find_own(
    State(showtimes_service): State<Arc<dyn ShowtimesService>>,
    Extension(user): Extension<User>,
) -> Result<(StatusCode, Json<Vec<output::Showtime>>), Error> {
    let showtimes = showtimes_service.find_own(&user).await?;

    Ok((StatusCode::OK, Json(showtimes)))
}

pub async fn find(
    State(showtimes_service): State<Arc<dyn ShowtimesService>>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<output::Showtime>), Error> {
    let id = parse_object_id(&id)?;
    let showtime = showtimes_service.find(id).await?;

    Ok((StatusCode::OK, Json(showtime)))
}

pub async fn find_for_movie(
    State(showtimes_service): State<Arc<dyn ShowtimesService>>,
    Query(filters): Query<input::ShowtimeFilters>,
) -> Result<(StatusCode, Json<Vec<output::Showtime>>), Error> {
    let showtimes = showtimes_service.find_for_movie(filters).await?;

    Ok((StatusCode::OK, Json(showtimes)))
}

pub async fn update(
    State(showtimes_service): State<Arc<dyn ShowtimesService>>,
    Extension(user): Extension<User>,
    Json(showtime): Json<input::WithId<input::Showtime>>,
) -> Result<(StatusCode, Json<output::Showtime>), Error> {
    let id = parse_object_id(&showtime.id)?;
    let showtime = showtimes_service.update(&user, id, showtime.data).await?;

    Ok((StatusCode::OK, Json(showtime)))
}

pub async fn delete(
    State(showtimes_service): State<Arc<dyn ShowtimesService>>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
) -> Result<StatusCode, Error> {
    let id = parse_object_id(&id)?;
    showtimes_service.delete(&user, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
