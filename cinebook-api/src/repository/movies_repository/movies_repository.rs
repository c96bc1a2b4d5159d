use super::Movie;
use crate::{dto::input, repository::Error};
use axum::async_trait;
use bson::oid::ObjectId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MoviesRepository: Send + Sync {
    async fn insert(&self, owner_id: ObjectId, movie: input::Movie) -> Result<Movie, Error>;

    async fn find(&self, id: ObjectId) -> Result<Option<Movie>, Error>;

    async fn find_all(&self) -> Result<Vec<Movie>, Error>;

    async fn find_by_owner(&self, owner_id: ObjectId) -> Result<Vec<Movie>, Error>;

    async fn find_many(&self, ids: Vec<ObjectId>) -> Result<Vec<Movie>, Error>;

    ///
    /// Finds movies which title contains text, ignoring case
    ///
    async fn search_by_title(&self, text: String, limit: i64) -> Result<Vec<Movie>, Error>;

    ///
    /// Replaces fields of the movie
    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when movie with id and owner does not exist
    ///
    async fn update(
        &self,
        id: ObjectId,
        owner_id: ObjectId,
        movie: input::Movie,
    ) -> Result<(), Error>;

    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when movie with id and owner does not exist
    ///
    async fn delete(&self, id: ObjectId, owner_id: ObjectId) -> Result<(), Error>;
}
