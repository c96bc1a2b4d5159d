mod admin_requests_repository;
mod error;
mod movies_repository;
mod showtimes_repository;
mod theatres_repository;
mod tickets_repository;
mod users_repository;

pub use admin_requests_repository::*;
pub use error::*;
pub use movies_repository::*;
pub use showtimes_repository::*;
pub use theatres_repository::*;
pub use tickets_repository::*;
pub use users_repository::*;

use bson::{oid::ObjectId, Bson, DateTime, Document};
use mongodb::{error::ErrorKind, options::IndexOptions, Collection, IndexModel};
use std::sync::Arc;
use time::{Date, OffsetDateTime};

///
/// Creates index unless index with the same name and keys already exists
///
async fn create_index(
    collection: &Collection<Document>,
    name: &str,
    keys: Document,
    unique: bool,
) -> Result<(), mongodb::error::Error> {
    let index = IndexModel::builder()
        .keys(keys)
        .options(
            IndexOptions::builder()
                .name(name.to_string())
                .unique(unique)
                .build(),
        )
        .build();

    collection.create_index(index).await?;
    tracing::debug!(collection = collection.name(), index = name, "created index");

    Ok(())
}

fn inserted_object_id(inserted_id: Bson) -> Result<ObjectId, Error> {
    match inserted_id {
        Bson::ObjectId(id) => Ok(id),
        _ => {
            tracing::error!("invalid type of inserted '_id'");
            Err(Error::Mongo(
                ErrorKind::Custom(Arc::new("invalid type of inserted '_id'")).into(),
            ))
        }
    }
}

///
/// Calendar dates are stored as UTC midnight
///
fn date_to_bson(date: Date) -> DateTime {
    DateTime::from(date.midnight().assume_utc())
}

fn bson_to_date(date_time: DateTime) -> Date {
    OffsetDateTime::from(date_time).date()
}

///
/// Tests require env variables to be set and database to be running
///
#[cfg(test)]
pub mod test {
    use crate::application::ApplicationEnv;
    use anyhow::Context;
    use mongodb::{options::ClientOptions, Client, Database};
    use uuid::Uuid;

    pub async fn create_test_database() -> anyhow::Result<Database> {
        let env = ApplicationEnv::parse().context("failed to parse env variables")?;
        let db_name = format!("test_{}_{}", env.db_name, Uuid::new_v4().simple());

        let db_client_options = ClientOptions::parse(&env.db_connection_string).await?;
        let db_client = Client::with_options(db_client_options)?;
        let db = db_client.database(&db_name);

        Ok(db)
    }

    pub async fn destroy_test_database(database: Database) {
        let _ = database.drop().await;
        database.client().clone().shutdown().await;
    }

    #[test]
    fn date_stored_as_utc_midnight() {
        let date = time::macros::date!(2024 - 05 - 17);
        let stored = super::date_to_bson(date);

        assert_eq!(
            time::OffsetDateTime::from(stored),
            time::macros::datetime!(2024-05-17 0:00 UTC)
        );
        assert_eq!(super::bson_to_date(stored), date);
    }
}
