use crate::{
    auth::User,
    dto::{input, output},
    error::Error,
};
use axum::async_trait;
use bson::oid::ObjectId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TheatresService: Send + Sync {
    ///
    /// ### Errors
    /// - [Error::Forbidden] when user is not an admin
    /// - [Error::Validation] when
    ///     - name or city is blank
    ///     - ticket price is negative
    ///     - layout has no seats or more than 26 rows
    ///
    async fn create(&self, user: &User, theatre: input::Theatre)
        -> Result<output::Theatre, Error>;

    async fn find_own(&self, user: &User) -> Result<Vec<output::Theatre>, Error>;

    ///
    /// ### Errors
    /// - [Error::TheatreNotExist] when theatre does not exist
    ///
    async fn find(&self, id: ObjectId) -> Result<output::Theatre, Error>;

    ///
    /// ### Errors
    /// - [Error::Validation] when theatre is invalid
    /// - [Error::TheatreNotExist] when theatre does not exist
    /// - [Error::Forbidden] when theatre belongs to another user
    ///
    async fn update(
        &self,
        user: &User,
        id: ObjectId,
        theatre: input::Theatre,
    ) -> Result<output::Theatre, Error>;

    ///
    /// ### Errors
    /// - [Error::TheatreNotExist] when theatre does not exist
    /// - [Error::Forbidden] when theatre belongs to another user
    ///
    async fn delete(&self, user: &User, id: ObjectId) -> Result<(), Error>;
}
