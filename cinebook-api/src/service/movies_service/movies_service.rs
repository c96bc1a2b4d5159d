use crate::{
    auth::User,
    dto::{input, output},
    error::Error,
};
use axum::async_trait;
use bson::oid::ObjectId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MoviesService: Send + Sync {
    async fn find_all(&self) -> Result<Vec<output::Movie>, Error>;

    ///
    /// Finds at most 10 movies which title contains the query, ignoring case.
    /// Blank query matches nothing.
    ///
    async fn search(&self, query: String) -> Result<Vec<output::Movie>, Error>;

    ///
    /// ### Errors
    /// - [Error::Forbidden] when user is not an admin
    /// - [Error::Validation] when movie is invalid
    ///
    async fn create(&self, user: &User, movie: input::Movie) -> Result<output::Movie, Error>;

    async fn find_own(&self, user: &User) -> Result<Vec<output::Movie>, Error>;

    ///
    /// ### Errors
    /// - [Error::MovieNotExist] when movie does not exist
    ///
    async fn find(&self, id: ObjectId) -> Result<output::Movie, Error>;

    ///
    /// ### Errors
    /// - [Error::Validation] when movie is invalid
    /// - [Error::MovieNotExist] when movie does not exist
    /// - [Error::Forbidden] when movie belongs to another user
    ///
    async fn update(
        &self,
        user: &User,
        id: ObjectId,
        movie: input::Movie,
    ) -> Result<output::Movie, Error>;

    ///
    /// ### Errors
    /// - [Error::MovieNotExist] when movie does not exist
    /// - [Error::Forbidden] when movie belongs to another user
    ///
    async fn delete(&self, user: &User, id: ObjectId) -> Result<(), Error>;
}
