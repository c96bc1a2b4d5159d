use super::AdminRequestsService;
use crate::{
    auth::{self, Role, User},
    dto::output,
    error::Error,
    repository::{self, AdminRequestsRepository, UsersRepository},
};
use axum::async_trait;
use bson::oid::ObjectId;
use std::sync::Arc;

pub struct AdminRequestsServiceImpl {
    users_repository: Arc<dyn UsersRepository>,
    admin_requests_repository: Arc<dyn AdminRequestsRepository>,
}

impl AdminRequestsServiceImpl {
    pub fn new(
        users_repository: Arc<dyn UsersRepository>,
        admin_requests_repository: Arc<dyn AdminRequestsRepository>,
    ) -> Self {
        Self {
            users_repository,
            admin_requests_repository,
        }
    }
}

#[async_trait]
impl AdminRequestsService for AdminRequestsServiceImpl {
    async fn find(&self, user: &User) -> Result<output::AdminRequestList, Error> {
        tracing::info!("finding admin requests");

        auth::require_any_role(self.users_repository.as_ref(), user, &[Role::SuperAdmin]).await?;

        let list = self
            .admin_requests_repository
            .find()
            .await?
            .ok_or(Error::AdminRequestListNotExist)?;
        tracing::info!(count = list.user_ids.len(), "found admin requests");

        Ok(output::AdminRequestList::from(list))
    }

    async fn create_list(&self) -> Result<output::AdminRequestList, Error> {
        tracing::info!("creating admin request list");

        let list = self.admin_requests_repository.get_or_create().await?;
        tracing::info!("created admin request list");

        Ok(output::AdminRequestList::from(list))
    }

    async fn add(
        &self,
        user: &User,
        user_id: ObjectId,
    ) -> Result<output::AdminRequestList, Error> {
        tracing::info!(%user_id, "adding admin request");

        if user_id != user.id {
            auth::require_any_role(self.users_repository.as_ref(), user, &[Role::SuperAdmin])
                .await?;
        }

        self.users_repository
            .find(user_id)
            .await?
            .ok_or(Error::UserNotExist)?;

        let list = self.admin_requests_repository.add(user_id).await?;
        tracing::info!(%user_id, "added admin request");

        Ok(output::AdminRequestList::from(list))
    }

    async fn remove(
        &self,
        user: &User,
        user_id: ObjectId,
    ) -> Result<output::AdminRequestList, Error> {
        tracing::info!(%user_id, "removing admin request");

        auth::require_any_role(self.users_repository.as_ref(), user, &[Role::SuperAdmin]).await?;

        let list = self
            .admin_requests_repository
            .remove(user_id)
            .await
            .map_err(|err| match err {
                repository::Error::NoDocumentUpdated => Error::AdminRequestListNotExist,
                err => Error::Database(err),
            })?;
        tracing::info!(%user_id, "removed admin request");

        Ok(output::AdminRequestList::from(list))
    }
}
