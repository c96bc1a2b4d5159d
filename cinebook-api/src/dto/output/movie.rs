use crate::repository;
use serde::Serialize;
use time::Date;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Movie {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub photos: Vec<String>,
    pub languages: String,
    pub length: i32,
    pub genre: String,
    pub certificate: String,
    #[serde(with = "crate::dto::iso_date::option")]
    pub release_date: Option<Date>,
    pub director: String,
    pub description: String,
}

impl From<repository::Movie> for Movie {
    fn from(value: repository::Movie) -> Self {
        Self {
            id: value.id.to_hex(),
            owner_id: value.owner_id.to_hex(),
            title: value.title,
            photos: value.photos,
            languages: value.languages,
            length: value.length,
            genre: value.genre,
            certificate: value.certificate,
            release_date: value.release_date,
            director: value.director,
            description: value.description,
        }
    }
}
