use super::TheatresService;
use crate::{
    auth::{self, Role, User},
    dto::{input, output},
    error::Error,
    repository::{self, TheatresRepository, UsersRepository},
    service::{validate_not_blank, validate_not_negative},
};
use axum::async_trait;
use bson::oid::ObjectId;
use std::sync::Arc;

///
/// Seat rows are named with single letters
///
pub const MAX_ROWS: i32 = 26;

pub struct TheatresServiceImpl {
    users_repository: Arc<dyn UsersRepository>,
    theatres_repository: Arc<dyn TheatresRepository>,
}

impl TheatresServiceImpl {
    pub fn new(
        users_repository: Arc<dyn UsersRepository>,
        theatres_repository: Arc<dyn TheatresRepository>,
    ) -> Self {
        Self {
            users_repository,
            theatres_repository,
        }
    }

    fn validate_theatre(theatre: &input::Theatre) -> Result<(), Error> {
        validate_not_blank(&theatre.theatre_name, "theatre_name")?;
        validate_not_blank(&theatre.city, "city")?;
        validate_not_negative(theatre.ticket_price, "ticket_price")?;
        if !(1..=MAX_ROWS).contains(&theatre.rows) {
            return Err(Error::Validation(format!(
                "rows must be between 1 and {MAX_ROWS}"
            )));
        }
        if theatre.cols < 1 {
            return Err(Error::Validation("cols must be positive".to_string()));
        }

        Ok(())
    }

    async fn find_owned(&self, user: &User, id: ObjectId) -> Result<repository::Theatre, Error> {
        let theatre = self
            .theatres_repository
            .find(id)
            .await?
            .ok_or(Error::TheatreNotExist)?;
        auth::require_owner(user, &theatre)?;

        Ok(theatre)
    }

    fn map_not_updated(err: repository::Error) -> Error {
        match err {
            repository::Error::NoDocumentUpdated => Error::TheatreNotExist,
            err => Error::Database(err),
        }
    }
}

#[async_trait]
impl TheatresService for TheatresServiceImpl {
    async fn create(
        &self,
        user: &User,
        theatre: input::Theatre,
    ) -> Result<output::Theatre, Error> {
        tracing::info!("creating theatre");
        tracing::trace!(?theatre);

        auth::require_any_role(self.users_repository.as_ref(), user, Role::CATALOG_MANAGERS)
            .await?;
        Self::validate_theatre(&theatre)?;

        let theatre = self.theatres_repository.insert(user.id, theatre).await?;
        tracing::info!(id = %theatre.id, "created theatre");

        Ok(output::Theatre::from(theatre))
    }

    async fn find_own(&self, user: &User) -> Result<Vec<output::Theatre>, Error> {
        tracing::info!("finding own theatres");

        let theatres = self.theatres_repository.find_by_owner(user.id).await?;
        tracing::info!(count = theatres.len(), "found theatres");

        Ok(theatres.into_iter().map(output::Theatre::from).collect())
    }

    async fn find(&self, id: ObjectId) -> Result<output::Theatre, Error> {
        tracing::info!(%id, "finding theatre");

        let theatre = self
            .theatres_repository
            .find(id)
            .await?
            .ok_or(Error::TheatreNotExist)?;

        Ok(output::Theatre::from(theatre))
    }

    async fn update(
        &self,
        user: &User,
        id: ObjectId,
        theatre: input::Theatre,
    ) -> Result<output::Theatre, Error> {
        tracing::info!(%id, "updating theatre");
        tracing::trace!(?theatre);

        Self::validate_theatre(&theatre)?;
        let existing = self.find_owned(user, id).await?;

        self.theatres_repository
            .update(id, user.id, theatre.clone())
            .await
            .map_err(Self::map_not_updated)?;

        tracing::info!(%id, "updated theatre");

        Ok(output::Theatre::from(repository::Theatre {
            id,
            owner_id: existing.owner_id,
            theatre_name: theatre.theatre_name,
            city: theatre.city,
            ticket_price: theatre.ticket_price,
            rows: theatre.rows,
            cols: theatre.cols,
        }))
    }

    async fn delete(&self, user: &User, id: ObjectId) -> Result<(), Error> {
        tracing::info!(%id, "deleting theatre");

        self.find_owned(user, id).await?;
        self.theatres_repository
            .delete(id, user.id)
            .await
            .map_err(Self::map_not_updated)?;

        tracing::info!(%id, "deleted theatre");

        Ok(())
    }
}
