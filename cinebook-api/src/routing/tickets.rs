use crate::{
    auth::User,
    dto::{input, output},
    error::Error,
    service::{parse_object_id, TicketsService},
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use std::sync::Arc;

pub async fn book(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Extension(user): Extension<User>,
    Json(booking): Json<input::BookTicket>,
) -> Result<(StatusCode, Json<output::BookedTicket>), Error> {
    let ticket = tickets_service.book(&user, booking).await?;

    Ok((StatusCode::CREATED, Json(ticket)))
}

pub async fn find_booked_seats(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Query(query): Query<input::BookedSeatsQuery>,
) -> Result<(StatusCode, Json<output::BookedSeats>), Error> {
    let seats = tickets_service.find_booked_seats(query).await?;

    Ok((StatusCode::OK, Json(seats)))
}

pub async fn find_own(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Extension(user): Extension<User>,
) -> Result<(StatusCode, Json<Vec<output::UserTicket>>), Error> {
    let tickets = tickets_service.find_own(&user).await?;

    Ok((StatusCode::OK, Json(tickets)))
}

pub async fn cancel(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
) -> Result<StatusCode, Error> {
    let id = parse_object_id(&id)?;
    tickets_service.cancel(&user, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn send_booking_confirmation(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Extension(user): Extension<User>,
    Json(ticket): Json<input::TicketId>,
) -> Result<StatusCode, Error> {
    let ticket_id = parse_object_id(&ticket.ticket_id)?;
    tickets_service
        .send_booking_confirmation(&user, ticket_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn send_cancellation(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Extension(user): Extension<User>,
    Json(details): Json<input::CancellationEmail>,
) -> Result<StatusCode, Error> {
    tickets_service.send_cancellation(&user, details).await?;

    Ok(StatusCode::NO_CONTENT)
}
