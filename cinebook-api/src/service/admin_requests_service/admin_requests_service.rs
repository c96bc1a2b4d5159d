use crate::{auth::User, dto::output, error::Error};
use axum::async_trait;
use bson::oid::ObjectId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdminRequestsService: Send + Sync {
    ///
    /// ### Errors
    /// - [Error::Forbidden] when user is not a super admin
    /// - [Error::AdminRequestListNotExist] when list was never created
    ///
    async fn find(&self, user: &User) -> Result<output::AdminRequestList, Error>;

    ///
    /// Returns the list, creating it when it does not exist
    ///
    async fn create_list(&self) -> Result<output::AdminRequestList, Error>;

    ///
    /// Adds user to the list. Adding the same user again changes nothing.
    ///
    /// ### Errors
    /// - [Error::Forbidden] when user adds somebody else and is not a super admin
    /// - [Error::UserNotExist] when added user does not exist
    ///
    async fn add(&self, user: &User, user_id: ObjectId)
        -> Result<output::AdminRequestList, Error>;

    ///
    /// ### Errors
    /// - [Error::Forbidden] when user is not a super admin
    /// - [Error::AdminRequestListNotExist] when list was never created
    ///
    async fn remove(
        &self,
        user: &User,
        user_id: ObjectId,
    ) -> Result<output::AdminRequestList, Error>;
}
