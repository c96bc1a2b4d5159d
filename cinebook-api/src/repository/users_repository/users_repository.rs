use super::{User, UserUpdate};
use crate::{auth::Role, repository::Error};
use axum::async_trait;
use bson::oid::ObjectId;
use time::OffsetDateTime;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersRepository: Send + Sync {
    ///
    /// Inserts new user
    ///
    /// ### Errors
    /// - [Error::InsertUniqueViolation] when email is already used
    ///
    async fn insert(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
        role: Role,
        created_at: OffsetDateTime,
    ) -> Result<User, Error>;

    async fn find(&self, id: ObjectId) -> Result<Option<User>, Error>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, Error>;

    ///
    /// Finds all users sorted by creation date
    ///
    async fn find_all(&self) -> Result<Vec<User>, Error>;

    ///
    /// Updates fields that are set in [UserUpdate]
    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when user does not exist
    /// - [Error::InsertUniqueViolation] when new email is already used
    ///
    async fn update(&self, id: ObjectId, update: UserUpdate) -> Result<(), Error>;
}
