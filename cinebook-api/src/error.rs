use crate::repository;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("invalid id: {0}")]
    InvalidObjectId(String),

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("forbidden: {0}")]
    Forbidden(&'static str),

    #[error("email not registered")]
    EmailNotRegistered,

    #[error("email already registered")]
    DuplicateEmail,

    #[error("user not exist")]
    UserNotExist,

    #[error("movie not exist")]
    MovieNotExist,

    #[error("theatre not exist")]
    TheatreNotExist,

    #[error("showtime not exist")]
    ShowtimeNotExist,

    #[error("ticket not exist")]
    TicketNotExist,

    #[error("admin request list not exist")]
    AdminRequestListNotExist,

    #[error("seats already booked")]
    SeatsAlreadyBooked,

    #[error("showtime already has booked tickets")]
    ShowtimeHasTickets,

    #[error("upload error: {0}")]
    Upload(String),

    #[error("image download error: {0}")]
    Download(String),

    #[error("mail error: {0}")]
    Mail(String),

    #[error("database error: {0}")]
    Database(#[from] repository::Error),

    ///
    /// This error should be returned only in situations
    /// that should never occur when system is setup correctly.
    ///
    #[error("unexpected error: {0}")]
    UnexpectedError(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) | Error::InvalidObjectId(_) | Error::Upload(_) => {
                StatusCode::BAD_REQUEST
            }
            Error::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Error::Forbidden(_) => StatusCode::FORBIDDEN,
            Error::EmailNotRegistered
            | Error::UserNotExist
            | Error::MovieNotExist
            | Error::TheatreNotExist
            | Error::ShowtimeNotExist
            | Error::TicketNotExist
            | Error::AdminRequestListNotExist => StatusCode::NOT_FOUND,
            Error::SeatsAlreadyBooked | Error::ShowtimeHasTickets => StatusCode::CONFLICT,
            Error::DuplicateEmail => StatusCode::UNPROCESSABLE_ENTITY,
            Error::Download(_) | Error::Mail(_) => StatusCode::BAD_GATEWAY,
            Error::Database(_) | Error::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> String {
        match self {
            Error::Database(_) | Error::UnexpectedError(_) => "internal server error".to_string(),
            err => err.to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::warn!(err = %self);

        let status = self.status_code();
        let body = ErrorBody {
            error: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}
