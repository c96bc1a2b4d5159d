use super::Ticket;
use crate::repository::Error;
use axum::async_trait;
use bson::oid::ObjectId;
use time::OffsetDateTime;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsRepository: Send + Sync {
    ///
    /// Inserts ticket holding all seats of the booking
    ///
    /// ### Errors
    /// - [Error::InsertUniqueViolation] when
    ///     - any seat is already booked for the showtime and time slot
    ///     - booking code is already used
    ///
    #[allow(clippy::too_many_arguments)]
    async fn insert(
        &self,
        booking_code: Uuid,
        showtime_id: ObjectId,
        time_slot: &str,
        seat_ids: Vec<String>,
        ticket_price: i64,
        total_price: i64,
        user_id: ObjectId,
        booked_at: OffsetDateTime,
    ) -> Result<Ticket, Error>;

    async fn find(&self, id: ObjectId) -> Result<Option<Ticket>, Error>;

    ///
    /// Finds tickets of the user, newest first
    ///
    async fn find_by_user(&self, user_id: ObjectId) -> Result<Vec<Ticket>, Error>;

    ///
    /// Finds ids of all seats booked for the showtime and time slot
    ///
    async fn find_booked_seats(
        &self,
        showtime_id: ObjectId,
        time_slot: &str,
    ) -> Result<Vec<String>, Error>;

    async fn exists_for_showtime(&self, showtime_id: ObjectId) -> Result<bool, Error>;

    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when ticket does not exist
    ///
    async fn delete(&self, id: ObjectId) -> Result<(), Error>;
}
