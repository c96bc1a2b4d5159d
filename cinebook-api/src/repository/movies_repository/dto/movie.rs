use super::super::entity::MovieFindEntity;
use crate::{auth::Owned, repository::bson_to_date};
use bson::oid::ObjectId;
use time::Date;

#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: ObjectId,
    pub owner_id: ObjectId,
    pub title: String,
    pub photos: Vec<String>,
    pub languages: String,
    pub length: i32,
    pub genre: String,
    pub certificate: String,
    pub release_date: Option<Date>,
    pub director: String,
    pub description: String,
}

impl Owned for Movie {
    fn owner_id(&self) -> ObjectId {
        self.owner_id
    }
}

impl From<MovieFindEntity> for Movie {
    fn from(value: MovieFindEntity) -> Self {
        Self {
            id: value._id,
            owner_id: value.owner_id,
            title: value.title,
            photos: value.photos,
            languages: value.languages,
            length: value.length,
            genre: value.genre,
            certificate: value.certificate,
            release_date: value.release_date.map(bson_to_date),
            director: value.director,
            description: value.description,
        }
    }
}
