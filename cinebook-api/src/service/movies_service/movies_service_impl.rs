use super::MoviesService;
use crate::{
    auth::{self, Role, User},
    dto::{input, output},
    error::Error,
    repository::{self, MoviesRepository, UsersRepository},
    service::validate_not_blank,
};
use axum::async_trait;
use bson::oid::ObjectId;
use std::sync::Arc;

const SEARCH_LIMIT: i64 = 10;

pub struct MoviesServiceImpl {
    users_repository: Arc<dyn UsersRepository>,
    movies_repository: Arc<dyn MoviesRepository>,
}

impl MoviesServiceImpl {
    pub fn new(
        users_repository: Arc<dyn UsersRepository>,
        movies_repository: Arc<dyn MoviesRepository>,
    ) -> Self {
        Self {
            users_repository,
            movies_repository,
        }
    }

    fn validate_movie(movie: &input::Movie) -> Result<(), Error> {
        validate_not_blank(&movie.title, "title")?;
        if movie.length < 0 {
            return Err(Error::Validation("length must not be negative".to_string()));
        }

        Ok(())
    }

    async fn find_owned(&self, user: &User, id: ObjectId) -> Result<repository::Movie, Error> {
        let movie = self
            .movies_repository
            .find(id)
            .await?
            .ok_or(Error::MovieNotExist)?;
        auth::require_owner(user, &movie)?;

        Ok(movie)
    }

    fn map_not_updated(err: repository::Error) -> Error {
        match err {
            repository::Error::NoDocumentUpdated => Error::MovieNotExist,
            err => Error::Database(err),
        }
    }
}

#[async_trait]
impl MoviesService for MoviesServiceImpl {
    async fn find_all(&self) -> Result<Vec<output::Movie>, Error> {
        tracing::info!("finding all movies");

        let movies = self.movies_repository.find_all().await?;
        tracing::info!(count = movies.len(), "found movies");

        Ok(movies.into_iter().map(output::Movie::from).collect())
    }

    async fn search(&self, query: String) -> Result<Vec<output::Movie>, Error> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        tracing::info!(query, "searching movies");

        let movies = self
            .movies_repository
            .search_by_title(query.to_string(), SEARCH_LIMIT)
            .await?;
        tracing::info!(count = movies.len(), "found movies");

        Ok(movies.into_iter().map(output::Movie::from).collect())
    }

    async fn create(&self, user: &User, movie: input::Movie) -> Result<output::Movie, Error> {
        tracing::info!("creating movie");
        tracing::trace!(?movie);

        auth::require_any_role(self.users_repository.as_ref(), user, Role::CATALOG_MANAGERS)
            .await?;
        Self::validate_movie(&movie)?;

        let movie = self.movies_repository.insert(user.id, movie).await?;
        tracing::info!(id = %movie.id, "created movie");

        Ok(output::Movie::from(movie))
    }

    async fn find_own(&self, user: &User) -> Result<Vec<output::Movie>, Error> {
        tracing::info!("finding own movies");

        let movies = self.movies_repository.find_by_owner(user.id).await?;
        tracing::info!(count = movies.len(), "found movies");

        Ok(movies.into_iter().map(output::Movie::from).collect())
    }

    async fn find(&self, id: ObjectId) -> Result<output::Movie, Error> {
        tracing::info!(%id, "finding movie");

        let movie = self
            .movies_repository
            .find(id)
            .await?
            .ok_or(Error::MovieNotExist)?;

        Ok(output::Movie::from(movie))
    }

    async fn update(
        &self,
        user: &User,
        id: ObjectId,
        movie: input::Movie,
    ) -> Result<output::Movie, Error> {
        tracing::info!(%id, "updating movie");
        tracing::trace!(?movie);

        Self::validate_movie(&movie)?;
        let existing = self.find_owned(user, id).await?;

        self.movies_repository
            .update(id, user.id, movie.clone())
            .await
            .map_err(Self::map_not_updated)?;

        tracing::info!(%id, "updated movie");

        let updated = repository::Movie {
            id,
            owner_id: existing.owner_id,
            title: movie.title,
            photos: movie.photos,
            languages: movie.languages,
            length: movie.length,
            genre: movie.genre,
            certificate: movie.certificate,
            release_date: movie.release_date,
            director: movie.director,
            description: movie.description,
        };

        Ok(output::Movie::from(updated))
    }

    async fn delete(&self, user: &User, id: ObjectId) -> Result<(), Error> {
        tracing::info!(%id, "deleting movie");

        self.find_owned(user, id).await?;
        self.movies_repository
            .delete(id, user.id)
            .await
            .map_err(Self::map_not_updated)?;

        tracing::info!(%id, "deleted movie");

        Ok(())
    }
}
