use bson::{oid::ObjectId, DateTime};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct MovieFindEntity {
    pub _id: ObjectId,
    pub owner_id: ObjectId,

    pub title: String,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub languages: String,
    #[serde(default)]
    pub length: i32,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub certificate: String,
    pub release_date: Option<DateTime>,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub description: String,
}
