use super::AdminRequestList;
use crate::repository::Error;
use axum::async_trait;
use bson::oid::ObjectId;

///
/// Single list of users that requested admin role
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdminRequestsRepository: Send + Sync {
    async fn find(&self) -> Result<Option<AdminRequestList>, Error>;

    ///
    /// Returns the list, creating an empty one when it does not exist
    ///
    async fn get_or_create(&self) -> Result<AdminRequestList, Error>;

    ///
    /// Adds user to the list unless already present.
    /// List is created when it does not exist.
    ///
    async fn add(&self, user_id: ObjectId) -> Result<AdminRequestList, Error>;

    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when the list does not exist
    ///
    async fn remove(&self, user_id: ObjectId) -> Result<AdminRequestList, Error>;
}
