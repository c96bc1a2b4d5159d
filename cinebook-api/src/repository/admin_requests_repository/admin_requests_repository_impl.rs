use super::{entity::AdminRequestListFindEntity, AdminRequestList, AdminRequestsRepository};
use crate::repository::Error;
use axum::async_trait;
use bson::{doc, oid::ObjectId, Document};
use mongodb::{options::ReturnDocument, Collection, Database};

const ADMIN_REQUEST_LISTS: &str = "admin_request_lists";
const ADMIN_REQUEST_LIST_ID: &str = "admin_requests";

pub struct AdminRequestsRepositoryImpl {
    database: Database,
}

impl AdminRequestsRepositoryImpl {
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    fn collection(&self) -> Collection<AdminRequestListFindEntity> {
        self.database.collection(ADMIN_REQUEST_LISTS)
    }

    async fn upsert(&self, update: Document) -> Result<AdminRequestList, Error> {
        let list = self
            .collection()
            .find_one_and_update(doc! { "_id": ADMIN_REQUEST_LIST_ID }, update)
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await?
            .map(AdminRequestList::from)
            .unwrap_or_default();

        Ok(list)
    }
}

#[async_trait]
impl AdminRequestsRepository for AdminRequestsRepositoryImpl {
    async fn find(&self) -> Result<Option<AdminRequestList>, Error> {
        let list = self
            .collection()
            .find_one(doc! { "_id": ADMIN_REQUEST_LIST_ID })
            .await?
            .map(AdminRequestList::from);

        Ok(list)
    }

    async fn get_or_create(&self) -> Result<AdminRequestList, Error> {
        self.upsert(doc! {
            "$setOnInsert": {
                "user_ids": [],
            }
        })
        .await
    }

    async fn add(&self, user_id: ObjectId) -> Result<AdminRequestList, Error> {
        self.upsert(doc! {
            "$addToSet": {
                "user_ids": user_id,
            }
        })
        .await
    }

    async fn remove(&self, user_id: ObjectId) -> Result<AdminRequestList, Error> {
        let list = self
            .collection()
            .find_one_and_update(
                doc! { "_id": ADMIN_REQUEST_LIST_ID },
                doc! {
                    "$pull": {
                        "user_ids": user_id,
                    }
                },
            )
            .return_document(ReturnDocument::After)
            .await?
            .map(AdminRequestList::from)
            .ok_or(Error::NoDocumentUpdated)?;

        Ok(list)
    }
}
