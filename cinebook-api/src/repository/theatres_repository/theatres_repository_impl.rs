use super::{
    entity::{TheatreDataEntity, TheatreFindEntity},
    Theatre, TheatresRepository,
};
use crate::{
    dto::input,
    repository::{create_index, inserted_object_id, Error},
};
use axum::async_trait;
use bson::{doc, oid::ObjectId, Document};
use futures_util::TryStreamExt;
use mongodb::Database;

const THEATRES: &str = "theatres";
const INDEX_NAME_OWNER_ID: &str = "index_owner_id";

pub struct TheatresRepositoryImpl {
    database: Database,
}

impl TheatresRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        let collection = database.collection::<Document>(THEATRES);
        create_index(&collection, INDEX_NAME_OWNER_ID, doc! { "owner_id": 1 }, false).await?;

        Ok(Self { database })
    }
}

#[async_trait]
impl TheatresRepository for TheatresRepositoryImpl {
    async fn insert(&self, owner_id: ObjectId, theatre: input::Theatre) -> Result<Theatre, Error> {
        let mut document = bson::to_document(&TheatreDataEntity::from(&theatre))
            .map_err(mongodb::error::Error::from)?;
        document.insert("owner_id", owner_id);

        let insert_result = self
            .database
            .collection::<Document>(THEATRES)
            .insert_one(document)
            .await?;

        let id = inserted_object_id(insert_result.inserted_id)?;

        Ok(Theatre {
            id,
            owner_id,
            theatre_name: theatre.theatre_name,
            city: theatre.city,
            ticket_price: theatre.ticket_price,
            rows: theatre.rows,
            cols: theatre.cols,
        })
    }

    async fn find(&self, id: ObjectId) -> Result<Option<Theatre>, Error> {
        let theatre = self
            .database
            .collection::<TheatreFindEntity>(THEATRES)
            .find_one(doc! { "_id": id })
            .await?
            .map(Theatre::from);

        Ok(theatre)
    }

    async fn find_by_owner(&self, owner_id: ObjectId) -> Result<Vec<Theatre>, Error> {
        let theatres = self
            .database
            .collection::<TheatreFindEntity>(THEATRES)
            .find(doc! { "owner_id": owner_id })
            .sort(doc! { "_id": 1 })
            .await?
            .map_ok(Theatre::from)
            .try_collect()
            .await?;

        Ok(theatres)
    }

    async fn find_many(&self, ids: Vec<ObjectId>) -> Result<Vec<Theatre>, Error> {
        let theatres = self
            .database
            .collection::<TheatreFindEntity>(THEATRES)
            .find(doc! { "_id": { "$in": ids } })
            .await?
            .map_ok(Theatre::from)
            .try_collect()
            .await?;

        Ok(theatres)
    }

    async fn update(
        &self,
        id: ObjectId,
        owner_id: ObjectId,
        theatre: input::Theatre,
    ) -> Result<(), Error> {
        let set = bson::to_document(&TheatreDataEntity::from(&theatre))
            .map_err(mongodb::error::Error::from)?;

        let update_result = self
            .database
            .collection::<Document>(THEATRES)
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
            .collection::<Document>(THEATRES)
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
