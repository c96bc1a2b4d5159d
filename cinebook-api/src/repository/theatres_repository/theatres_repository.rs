use super::Theatre;
use crate::{dto::input, repository::Error};
use axum::async_trait;
use bson::oid::ObjectId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TheatresRepository: Send + Sync {
    async fn insert(&self, owner_id: ObjectId, theatre: input::Theatre) -> Result<Theatre, Error>;

    async fn find(&self, id: ObjectId) -> Result<Option<Theatre>, Error>;

    async fn find_by_owner(&self, owner_id: ObjectId) -> Result<Vec<Theatre>, Error>;

    async fn find_many(&self, ids: Vec<ObjectId>) -> Result<Vec<Theatre>, Error>;

    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when theatre with id and owner does not exist
    ///
    async fn update(
        &self,
        id: ObjectId,
        owner_id: ObjectId,
        theatre: input::Theatre,
    ) -> Result<(), Error>;

    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when theatre with id and owner does not exist
    ///
    async fn delete(&self, id: ObjectId, owner_id: ObjectId) -> Result<(), Error>;
}
