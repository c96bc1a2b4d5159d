use crate::{dto::input, repository::date_to_bson};
use bson::DateTime;
use serde::Serialize;

///
/// Fields of the movie set by its owner, used both for insert and update
///
#[derive(Serialize)]
pub struct MovieDataEntity<'a> {
    pub title: &'a str,
    pub photos: &'a [String],
    pub languages: &'a str,
    pub length: i32,
    pub genre: &'a str,
    pub certificate: &'a str,
    pub release_date: Option<DateTime>,
    pub director: &'a str,
    pub description: &'a str,
}

impl<'a> From<&'a input::Movie> for MovieDataEntity<'a> {
    fn from(value: &'a input::Movie) -> Self {
        Self {
            title: &value.title,
            photos: &value.photos,
            languages: &value.languages,
            length: value.length,
            genre: &value.genre,
            certificate: &value.certificate,
            release_date: value.release_date.map(date_to_bson),
            director: &value.director,
            description: &value.description,
        }
    }
}
