use super::ShowtimesService;
use crate::{
    auth::{self, Role, User},
    dto::{input, output},
    error::Error,
    repository::{
        self, MoviesRepository, ShowtimeData, ShowtimesRepository, TheatresRepository,
        TicketsRepository, UsersRepository,
    },
    service::{parse_daytime, parse_object_id, validate_not_negative},
};
use axum::async_trait;
use bson::oid::ObjectId;
use std::sync::Arc;

pub struct ShowtimesServiceImpl {
    users_repository: Arc<dyn UsersRepository>,
    movies_repository: Arc<dyn MoviesRepository>,
    theatres_repository: Arc<dyn TheatresRepository>,
    showtimes_repository: Arc<dyn ShowtimesRepository>,
    tickets_repository: Arc<dyn TicketsRepository>,
}

impl ShowtimesServiceImpl {
    pub fn new(
        users_repository: Arc<dyn UsersRepository>,
        movies_repository: Arc<dyn MoviesRepository>,
        theatres_repository: Arc<dyn TheatresRepository>,
        showtimes_repository: Arc<dyn ShowtimesRepository>,
        tickets_repository: Arc<dyn TicketsRepository>,
    ) -> Self {
        Self {
            users_repository,
            movies_repository,
            theatres_repository,
            showtimes_repository,
            tickets_repository,
        }
    }

    ///
    /// Validates showtime and fills fields copied from movie and theatre
    ///
    async fn resolve(&self, showtime: input::Showtime) -> Result<ShowtimeData, Error> {
        let movie_id = parse_object_id(&showtime.movie_id)?;
        let theatre_id = parse_object_id(&showtime.theatre_id)?;
        validate_not_negative(showtime.ticket_price, "ticket_price")?;
        let daytime = parse_daytime(&showtime.daytime, "daytime")?;

        let movie = self
            .movies_repository
            .find(movie_id)
            .await?
            .ok_or(Error::MovieNotExist)?;
        let theatre = self
            .theatres_repository
            .find(theatre_id)
            .await?
            .ok_or(Error::TheatreNotExist)?;

        Ok(ShowtimeData {
            movie_id,
            theatre_id,
            movie_name: movie.title,
            theatre_name: theatre.theatre_name,
            ticket_price: showtime.ticket_price,
            show_date: showtime.show_date,
            daytime,
            city: theatre.city,
        })
    }

    async fn find_owned(
        &self,
        user: &User,
        id: ObjectId,
    ) -> Result<repository::Showtime, Error> {
        let showtime = self
            .showtimes_repository
            .find(id)
            .await?
            .ok_or(Error::ShowtimeNotExist)?;
        auth::require_owner(user, &showtime)?;

        Ok(showtime)
    }

    ///
    /// Booked seats are bound to theatre, date and daytime of the showtime,
    /// so these cannot change once any ticket is sold
    ///
    async fn ensure_no_tickets(&self, id: ObjectId) -> Result<(), Error> {
        match self.tickets_repository.exists_for_showtime(id).await? {
            true => Err(Error::ShowtimeHasTickets),
            false => Ok(()),
        }
    }

    fn map_not_updated(err: repository::Error) -> Error {
        match err {
            repository::Error::NoDocumentUpdated => Error::ShowtimeNotExist,
            err => Error::Database(err),
        }
    }
}

#[async_trait]
impl ShowtimesService for ShowtimesServiceImpl {
    async fn create(
        &self,
        user: &User,
        showtime: input::Showtime,
    ) -> Result<output::Showtime, Error> {
        tracing::info!("creating showtime");
        tracing::trace!(?showtime);

        auth::require_any_role(self.users_repository.as_ref(), user, Role::CATALOG_MANAGERS)
            .await?;
        let data = self.resolve(showtime).await?;

        let showtime = self.showtimes_repository.insert(user.id, data).await?;
        tracing::info!(id = %showtime.id, "created showtime");

        Ok(output::Showtime::from(showtime))
    }

    async fn check(
        &self,
        query: input::ShowtimeCheckQuery,
    ) -> Result<output::ShowtimeExists, Error> {
        tracing::info!("checking showtime");
        tracing::trace!(?query);

        let movie_id = parse_object_id(&query.movie_id)?;
        let theatre_id = parse_object_id(&query.theatre_id)?;

        let exists = self
            .showtimes_repository
            .exists(movie_id, theatre_id, query.show_date)
            .await?;
        tracing::info!(exists, "checked showtime");

        Ok(output::ShowtimeExists { exists })
    }

    async fn find(&self, id: ObjectId) -> Result<output::Showtime, Error> {
        tracing::info!(%id, "finding showtime");

        let showtime = self
            .showtimes_repository
            .find(id)
            .await?
            .ok_or(Error::ShowtimeNotExist)?;

        Ok(output::Showtime::from(showtime))
    }

    async fn find_own(&self, user: &User) -> Result<Vec<output::Showtime>, Error> {
        tracing::info!("finding own showtimes");

        let showtimes = self.showtimes_repository.find_by_owner(user.id).await?;
        tracing::info!(count = showtimes.len(), "found showtimes");

        Ok(showtimes.into_iter().map(output::Showtime::from).collect())
    }

    async fn find_for_movie(
        &self,
        filters: input::ShowtimeFilters,
    ) -> Result<Vec<output::Showtime>, Error> {
        tracing::info!("finding showtimes of movie");
        tracing::trace!(?filters);

        let movie_id = parse_object_id(&filters.movie_id)?;
        let city = filters
            .city
            .map(|city| city.trim().to_string())
            .filter(|city| !city.is_empty());

        let showtimes = self
            .showtimes_repository
            .find_for_movie(movie_id, city, filters.date)
            .await?;
        tracing::info!(count = showtimes.len(), "found showtimes");

        Ok(showtimes.into_iter().map(output::Showtime::from).collect())
    }

    async fn update(
        &self,
        user: &User,
        id: ObjectId,
        showtime: input::Showtime,
    ) -> Result<output::Showtime, Error> {
        tracing::info!(%id, "updating showtime");
        tracing::trace!(?showtime);

        let existing = self.find_owned(user, id).await?;
        let data = self.resolve(showtime).await?;

        let screening_changed = existing.theatre_id != data.theatre_id
            || existing.show_date != data.show_date
            || existing.daytime != data.daytime;
        if screening_changed {
            self.ensure_no_tickets(id).await?;
        }

        self.showtimes_repository
            .update(id, user.id, data.clone())
            .await
            .map_err(Self::map_not_updated)?;

        tracing::info!(%id, "updated showtime");

        Ok(output::Showtime::from(repository::Showtime::new(
            id,
            existing.owner_id,
            data,
        )))
    }

    async fn delete(&self, user: &User, id: ObjectId) -> Result<(), Error> {
        tracing::info!(%id, "deleting showtime");

        self.find_owned(user, id).await?;
        self.ensure_no_tickets(id).await?;
        self.showtimes_repository
            .delete(id, user.id)
            .await
            .map_err(Self::map_not_updated)?;

        tracing::info!(%id, "deleted showtime");

        Ok(())
    }
}
