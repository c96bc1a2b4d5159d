use super::{
    entity::{ShowtimeDataEntity, ShowtimeFindEntity},
    Showtime, ShowtimeData, ShowtimesRepository,
};
use crate::repository::{create_index, date_to_bson, inserted_object_id, Error};
use axum::async_trait;
use bson::{doc, oid::ObjectId, Document};
use futures_util::TryStreamExt;
use mongodb::Database;
use time::{Date, Duration};

const SHOWTIMES: &str = "showtimes";
const INDEX_NAME_OWNER_ID: &str = "index_owner_id";
const INDEX_NAME_MOVIE_ID_SHOW_DATE: &str = "index_movie_id_show_date";

pub struct ShowtimesRepositoryImpl {
    database: Database,
}

impl ShowtimesRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        let collection = database.collection::<Document>(SHOWTIMES);
        create_index(&collection, INDEX_NAME_OWNER_ID, doc! { "owner_id": 1 }, false).await?;
        create_index(
            &collection,
            INDEX_NAME_MOVIE_ID_SHOW_DATE,
            doc! {
                "movie_id": 1,
                "show_date": 1,
            },
            false,
        )
        .await?;

        Ok(Self { database })
    }

    async fn find_with_filter(&self, filter: Document) -> Result<Vec<Showtime>, Error> {
        let showtimes = self
            .database
            .collection::<ShowtimeFindEntity>(SHOWTIMES)
            .find(filter)
            .sort(doc! {
                "show_date": 1,
                "daytime": 1,
            })
            .await?
            .map_ok(Showtime::from)
            .try_collect()
            .await?;

        Ok(showtimes)
    }
}

#[async_trait]
impl ShowtimesRepository for ShowtimesRepositoryImpl {
    async fn insert(&self, owner_id: ObjectId, showtime: ShowtimeData) -> Result<Showtime, Error> {
        let mut document = bson::to_document(&ShowtimeDataEntity::from(&showtime))
            .map_err(mongodb::error::Error::from)?;
        document.insert("owner_id", owner_id);

        let insert_result = self
            .database
            .collection::<Document>(SHOWTIMES)
            .insert_one(document)
            .await?;

        let id = inserted_object_id(insert_result.inserted_id)?;

        Ok(Showtime::new(id, owner_id, showtime))
    }

    async fn find(&self, id: ObjectId) -> Result<Option<Showtime>, Error> {
        let showtime = self
            .database
            .collection::<ShowtimeFindEntity>(SHOWTIMES)
            .find_one(doc! { "_id": id })
            .await?
            .map(Showtime::from);

        Ok(showtime)
    }

    async fn find_by_owner(&self, owner_id: ObjectId) -> Result<Vec<Showtime>, Error> {
        self.find_with_filter(doc! { "owner_id": owner_id }).await
    }

    async fn find_many(&self, ids: Vec<ObjectId>) -> Result<Vec<Showtime>, Error> {
        self.find_with_filter(doc! { "_id": { "$in": ids } }).await
    }

    async fn find_for_movie(
        &self,
        movie_id: ObjectId,
        city: Option<String>,
        date: Option<Date>,
    ) -> Result<Vec<Showtime>, Error> {
        let mut filter = doc! { "movie_id": movie_id };
        if let Some(city) = city {
            filter.insert("city", city);
        }
        if let Some(date) = date {
            let next_date = date.saturating_add(Duration::DAY);
            filter.insert(
                "show_date",
                doc! {
                    "$gte": date_to_bson(date),
                    "$lt": date_to_bson(next_date),
                },
            );
        }

        self.find_with_filter(filter).await
    }

    async fn exists(
        &self,
        movie_id: ObjectId,
        theatre_id: ObjectId,
        show_date: Date,
    ) -> Result<bool, Error> {
        let count = self
            .database
            .collection::<Document>(SHOWTIMES)
            .count_documents(doc! {
                "movie_id": movie_id,
                "theatre_id": theatre_id,
                "show_date": date_to_bson(show_date),
            })
            .await?;

        Ok(count > 0)
    }

    async fn update(
        &self,
        id: ObjectId,
        owner_id: ObjectId,
        showtime: ShowtimeData,
    ) -> Result<(), Error> {
        let set = bson::to_document(&ShowtimeDataEntity::from(&showtime))
            .map_err(mongodb::error::Error::from)?;

        let update_result = self
            .database
            .collection::<Document>(SHOWTIMES)
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
            .collection::<Document>(SHOWTIMES)
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
