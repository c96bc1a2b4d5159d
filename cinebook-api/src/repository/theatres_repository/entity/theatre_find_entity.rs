use bson::oid::ObjectId;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct TheatreFindEntity {
    pub _id: ObjectId,
    pub owner_id: ObjectId,

    pub theatre_name: String,
    pub city: String,
    pub ticket_price: i64,
    pub rows: i32,
    pub cols: i32,
}
