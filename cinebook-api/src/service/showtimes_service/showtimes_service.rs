use crate::{
    auth::User,
    dto::{input, output},
    error::Error,
};
use axum::async_trait;
use bson::oid::ObjectId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShowtimesService: Send + Sync {
    ///
    /// Creates showtime. Movie name, theatre name and city
    /// are copied from referenced movie and theatre.
    ///
    /// ### Errors
    /// - [Error::Forbidden] when user is not an admin
    /// - [Error::InvalidObjectId] when movie or theatre id is invalid
    /// - [Error::Validation] when
    ///     - ticket price is negative
    ///     - daytime is not in HH:MM format
    /// - [Error::MovieNotExist] when movie does not exist
    /// - [Error::TheatreNotExist] when theatre does not exist
    ///
    async fn create(
        &self,
        user: &User,
        showtime: input::Showtime,
    ) -> Result<output::Showtime, Error>;

    ///
    /// Checks whether the movie is already shown in the theatre on the date
    ///
    async fn check(&self, query: input::ShowtimeCheckQuery)
        -> Result<output::ShowtimeExists, Error>;

    ///
    /// ### Errors
    /// - [Error::ShowtimeNotExist] when showtime does not exist
    ///
    async fn find(&self, id: ObjectId) -> Result<output::Showtime, Error>;

    async fn find_own(&self, user: &User) -> Result<Vec<output::Showtime>, Error>;

    ///
    /// Finds showtimes of the movie, optionally in a city and on a date
    ///
    async fn find_for_movie(
        &self,
        filters: input::ShowtimeFilters,
    ) -> Result<Vec<output::Showtime>, Error>;

    ///
    /// ### Errors
    /// - the same as in [ShowtimesService::create]
    /// - [Error::ShowtimeNotExist] when showtime does not exist
    /// - [Error::Forbidden] when showtime belongs to another user
    /// - [Error::ShowtimeHasTickets] when theatre, date or daytime changes
    ///   and tickets are already booked
    ///
    async fn update(
        &self,
        user: &User,
        id: ObjectId,
        showtime: input::Showtime,
    ) -> Result<output::Showtime, Error>;

    ///
    /// ### Errors
    /// - [Error::ShowtimeNotExist] when showtime does not exist
    /// - [Error::Forbidden] when showtime belongs to another user
    /// - [Error::ShowtimeHasTickets] when tickets are already booked
    ///
    async fn delete(&self, user: &User, id: ObjectId) -> Result<(), Error>;
}
