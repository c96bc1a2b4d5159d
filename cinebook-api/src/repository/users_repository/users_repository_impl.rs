use super::{
    entity::{UserFindEntity, UserInsertEntity},
    User, UserUpdate, UsersRepository,
};
use crate::{
    auth::Role,
    repository::{create_index, inserted_object_id, Error},
};
use axum::async_trait;
use bson::{doc, oid::ObjectId, DateTime, Document};
use futures_util::TryStreamExt;
use mongodb::Database;
use time::OffsetDateTime;

const USERS: &str = "users";
const INDEX_NAME_UNIQUE_EMAIL: &str = "unique_index_email";

pub struct UsersRepositoryImpl {
    database: Database,
}

impl UsersRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        let collection = database.collection::<Document>(USERS);
        create_index(&collection, INDEX_NAME_UNIQUE_EMAIL, doc! { "email": 1 }, true).await?;

        Ok(Self { database })
    }
}

#[async_trait]
impl UsersRepository for UsersRepositoryImpl {
    async fn insert(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
        role: Role,
        created_at: OffsetDateTime,
    ) -> Result<User, Error> {
        let insert_entity = UserInsertEntity {
            name,
            email,
            password_hash,
            role,
            created_at: DateTime::from(created_at),
        };

        let insert_result = self
            .database
            .collection::<UserInsertEntity>(USERS)
            .insert_one(&insert_entity)
            .await
            .map_err(Error::from_write)?;

        let id = inserted_object_id(insert_result.inserted_id)?;

        Ok(User {
            id,
            name: name.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            role,
            created_at,
        })
    }

    async fn find(&self, id: ObjectId) -> Result<Option<User>, Error> {
        let user = self
            .database
            .collection::<UserFindEntity>(USERS)
            .find_one(doc! { "_id": id })
            .await?
            .map(User::from);

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, Error> {
        let user = self
            .database
            .collection::<UserFindEntity>(USERS)
            .find_one(doc! { "email": email })
            .await?
            .map(User::from);

        Ok(user)
    }

    async fn find_all(&self) -> Result<Vec<User>, Error> {
        let users = self
            .database
            .collection::<UserFindEntity>(USERS)
            .find(doc! {})
            .sort(doc! { "created_at": 1 })
            .await?
            .map_ok(User::from)
            .try_collect()
            .await?;

        Ok(users)
    }

    async fn update(&self, id: ObjectId, update: UserUpdate) -> Result<(), Error> {
        let mut set = Document::new();
        if let Some(name) = update.name {
            set.insert("name", name);
        }
        if let Some(email) = update.email {
            set.insert("email", email);
        }
        if let Some(role) = update.role {
            set.insert("role", role.as_ref());
        }

        let collection = self.database.collection::<Document>(USERS);

        // empty $set is rejected by the server
        if set.is_empty() {
            return match collection.count_documents(doc! { "_id": id }).await? {
                0 => Err(Error::NoDocumentUpdated),
                _ => Ok(()),
            };
        }

        let update_result = collection
            .update_one(doc! { "_id": id }, doc! { "$set": set })
            .await
            .map_err(Error::from_write)?;

        match update_result.matched_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }
}
