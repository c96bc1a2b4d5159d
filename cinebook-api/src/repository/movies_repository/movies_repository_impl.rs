use super::{
    entity::{MovieDataEntity, MovieFindEntity},
    Movie, MoviesRepository,
};
use crate::{
    dto::input,
    repository::{create_index, inserted_object_id, Error},
};
use axum::async_trait;
use bson::{doc, oid::ObjectId, Document};
use futures_util::TryStreamExt;
use mongodb::Database;

const MOVIES: &str = "movies";
const INDEX_NAME_OWNER_ID: &str = "index_owner_id";

pub struct MoviesRepositoryImpl {
    database: Database,
}

impl MoviesRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        let collection = database.collection::<Document>(MOVIES);
        create_index(&collection, INDEX_NAME_OWNER_ID, doc! { "owner_id": 1 }, false).await?;

        Ok(Self { database })
    }

    async fn find_with_filter(&self, filter: Document) -> Result<Vec<Movie>, Error> {
        let movies = self
            .database
            .collection::<MovieFindEntity>(MOVIES)
            .find(filter)
            .sort(doc! { "_id": 1 })
            .await?
            .map_ok(Movie::from)
            .try_collect()
            .await?;

        Ok(movies)
    }
}

#[async_trait]
impl MoviesRepository for MoviesRepositoryImpl {
    async fn insert(&self, owner_id: ObjectId, movie: input::Movie) -> Result<Movie, Error> {
        let mut document = bson::to_document(&MovieDataEntity::from(&movie))
            .map_err(mongodb::error::Error::from)?;
        document.insert("owner_id", owner_id);

        let insert_result = self
            .database
            .collection::<Document>(MOVIES)
            .insert_one(document)
            .await?;

        let id = inserted_object_id(insert_result.inserted_id)?;

        Ok(Movie {
            id,
            owner_id,
            title: movie.title,
            photos: movie.photos,
            languages: movie.languages,
            length: movie.length,
            genre: movie.genre,
            certificate: movie.certificate,
            release_date: movie.release_date,
            director: movie.director,
            description: movie.description,
        })
    }

    async fn find(&self, id: ObjectId) -> Result<Option<Movie>, Error> {
        let movie = self
            .database
            .collection::<MovieFindEntity>(MOVIES)
            .find_one(doc! { "_id": id })
            .await?
            .map(Movie::from);

        Ok(movie)
    }

    async fn find_all(&self) -> Result<Vec<Movie>, Error> {
        self.find_with_filter(doc! {}).await
    }

    async fn find_by_owner(&self, owner_id: ObjectId) -> Result<Vec<Movie>, Error> {
        self.find_with_filter(doc! { "owner_id": owner_id }).await
    }

    async fn find_many(&self, ids: Vec<ObjectId>) -> Result<Vec<Movie>, Error> {
        self.find_with_filter(doc! { "_id": { "$in": ids } }).await
    }

    async fn search_by_title(&self, text: String, limit: i64) -> Result<Vec<Movie>, Error> {
        let movies = self
            .database
            .collection::<MovieFindEntity>(MOVIES)
            .find(doc! {
                "title": {
                    "$regex": regex::escape(&text),
                    "$options": "i",
                }
            })
            .sort(doc! { "title": 1 })
            .limit(limit)
            .await?
            .map_ok(Movie::from)
            .try_collect()
            .await?;

        Ok(movies)
    }

    async fn update(
        &self,
        id: ObjectId,
        owner_id: ObjectId,
        movie: input::Movie,
    ) -> Result<(), Error> {
        let set = bson::to_document(&MovieDataEntity::from(&movie))
            .map_err(mongodb::error::Error::from)?;

        let update_result = self
            .database
            .collection::<Document>(MOVIES)
            .update_one(
                doc! {
                    "_id": id,
                    "owner_id": owner_id,
                },
                doc! { "$set": set },
            )
            .await?;

        match update_result.matched_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }

    async fn delete(&self, id: ObjectId, owner_id: ObjectId) -> Result<(), Error> {
        let delete_result = self
            .database
            .collection::<Document>(MOVIES)
            .delete_one(doc! {
                "_id": id,
                "owner_id": owner_id,
            })
            .await?;

        match delete_result.deleted_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }
}
