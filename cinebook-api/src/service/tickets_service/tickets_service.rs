use crate::{
    auth::User,
    dto::{input, output},
    error::Error,
};
use axum::async_trait;
use bson::oid::ObjectId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsService: Send + Sync {
    ///
    /// Books seats for the showtime in one ticket.
    /// Confirmation mail is sent in background.
    ///
    /// ### Returns
    /// ticket with generated booking code and total price
    ///
    /// ### Errors
    /// - [Error::InvalidObjectId] when showtime id is invalid
    /// - [Error::ShowtimeNotExist] when showtime does not exist
    /// - [Error::Validation] when
    ///     - time slot is not the showtime daytime
    ///     - seats are missing, malformed or outside of the theatre
    ///     - ticket price differs from the showtime price
    /// - [Error::SeatsAlreadyBooked] when any seat is already taken
    ///
    async fn book(&self, user: &User, booking: input::BookTicket)
        -> Result<output::BookedTicket, Error>;

    ///
    /// ### Errors
    /// - [Error::Validation] when showtime id or time slot is missing
    /// - [Error::InvalidObjectId] when showtime id is invalid
    ///
    async fn find_booked_seats(
        &self,
        query: input::BookedSeatsQuery,
    ) -> Result<output::BookedSeats, Error>;

    ///
    /// Finds tickets of the user, newest first
    ///
    async fn find_own(&self, user: &User) -> Result<Vec<output::UserTicket>, Error>;

    ///
    /// Deletes ticket, freeing its seats.
    /// Cancellation mail is sent in background.
    ///
    /// ### Errors
    /// - [Error::TicketNotExist] when ticket does not exist
    ///   or belongs to another user and user is not a super admin
    ///
    async fn cancel(&self, user: &User, id: ObjectId) -> Result<(), Error>;

    ///
    /// ### Errors
    /// - [Error::TicketNotExist] when ticket does not exist or belongs to another user
    /// - [Error::Mail] when mail was not sent
    ///
    async fn send_booking_confirmation(&self, user: &User, ticket_id: ObjectId)
        -> Result<(), Error>;

    ///
    /// ### Errors
    /// - [Error::Validation] when booking code is blank
    /// - [Error::Mail] when mail was not sent
    ///
    async fn send_cancellation(
        &self,
        user: &User,
        details: input::CancellationEmail,
    ) -> Result<(), Error>;
}
