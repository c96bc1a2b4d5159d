use bson::{oid::ObjectId, DateTime};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct ShowtimeFindEntity {
    pub _id: ObjectId,
    pub owner_id: ObjectId,

    pub movie_id: ObjectId,
    pub theatre_id: ObjectId,
    pub movie_name: String,
    pub theatre_name: String,
    pub ticket_price: i64,
    pub show_date: DateTime,
    pub daytime: String,
    pub city: String,
}
