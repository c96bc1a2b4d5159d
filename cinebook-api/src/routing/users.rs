use crate::{
    application::CookieConfig,
    auth::User,
    dto::{input, output},
    error::Error,
    service::{parse_object_id, UsersService},
};
use axum::{
    extract::{Path, State},
    http::{header::SET_COOKIE, HeaderName, StatusCode},
    Extension, Json,
};
use jwt_auth::cookie;
use std::sync::Arc;

pub async fn register(
    State(users_service): State<Arc<dyn UsersService>>,
    Json(user): Json<input::RegisterUser>,
) -> Result<(StatusCode, Json<output::User>), Error> {
    let user = users_service.register(user).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn login(
    State(users_service): State<Arc<dyn UsersService>>,
    State(cookie_config): State<CookieConfig>,
    Json(credentials): Json<input::LoginUser>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<output::User>), Error> {
    let session = users_service.login(credentials).await?;
    let cookie = cookie::session_cookie(&session.token, session.max_age, cookie_config.secure);

    Ok((StatusCode::OK, [(SET_COOKIE, cookie)], Json(session.user)))
}

pub async fn logout(
    State(cookie_config): State<CookieConfig>,
) -> (StatusCode, [(HeaderName, String); 1]) {
    let cookie = cookie::expired_session_cookie(cookie_config.secure);

    (StatusCode::NO_CONTENT, [(SET_COOKIE, cookie)])
}

pub async fn profile(
    State(users_service): State<Arc<dyn UsersService>>,
    Extension(user): Extension<User>,
) -> Result<(StatusCode, Json<output::User>), Error> {
    let user = users_service.find_profile(&user).await?;

    Ok((StatusCode::OK, Json(user)))
}

pub async fn find_all(
    State(users_service): State<Arc<dyn UsersService>>,
    Extension(user): Extension<User>,
) -> Result<(StatusCode, Json<Vec<output::User>>), Error> {
    let users = users_service.find_all(&user).await?;

    Ok((StatusCode::OK, Json(users)))
}

pub async fn find(
    State(users_service): State<Arc<dyn UsersService>>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<output::User>), Error> {
    let id = parse_object_id(&id)?;
    let user = users_service.find(id).await?;

    Ok((StatusCode::OK, Json(user)))
}

pub async fn update(
    State(users_service): State<Arc<dyn UsersService>>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
    Json(update): Json<input::UserUpdate>,
) -> Result<(StatusCode, Json<output::User>), Error> {
    let id = parse_object_id(&id)?;
    let user = users_service.update(&user, id, update).await?;

    Ok((StatusCode::OK, Json(user)))
}
