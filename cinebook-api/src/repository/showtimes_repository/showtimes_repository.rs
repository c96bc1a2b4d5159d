use super::{Showtime, ShowtimeData};
use crate::repository::Error;
use axum::async_trait;
use bson::oid::ObjectId;
use time::Date;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShowtimesRepository: Send + Sync {
    async fn insert(&self, owner_id: ObjectId, showtime: ShowtimeData) -> Result<Showtime, Error>;

    async fn find(&self, id: ObjectId) -> Result<Option<Showtime>, Error>;

    async fn find_by_owner(&self, owner_id: ObjectId) -> Result<Vec<Showtime>, Error>;

    async fn find_many(&self, ids: Vec<ObjectId>) -> Result<Vec<Showtime>, Error>;

    ///
    /// Finds showtimes of the movie sorted by show date and daytime.
    /// Date filter matches whole day in UTC.
    ///
    async fn find_for_movie(
        &self,
        movie_id: ObjectId,
        city: Option<String>,
        date: Option<Date>,
    ) -> Result<Vec<Showtime>, Error>;

    async fn exists(
        &self,
        movie_id: ObjectId,
        theatre_id: ObjectId,
        show_date: Date,
    ) -> Result<bool, Error>;

    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when showtime with id and owner does not exist
    ///
    async fn update(
        &self,
        id: ObjectId,
        owner_id: ObjectId,
        showtime: ShowtimeData,
    ) -> Result<(), Error>;

    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when showtime with id and owner does not exist
    ///
    async fn delete(&self, id: ObjectId, owner_id: ObjectId) -> Result<(), Error>;
}
