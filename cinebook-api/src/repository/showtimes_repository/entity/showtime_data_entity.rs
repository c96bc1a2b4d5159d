use super::super::ShowtimeData;
use crate::repository::date_to_bson;
use bson::{oid::ObjectId, DateTime};
use serde::Serialize;

#[derive(Serialize)]
pub struct ShowtimeDataEntity<'a> {
    pub movie_id: ObjectId,
    pub theatre_id: ObjectId,
    pub movie_name: &'a str,
    pub theatre_name: &'a str,
    pub ticket_price: i64,
    pub show_date: DateTime,
    pub daytime: &'a str,
    pub city: &'a str,
}

impl<'a> From<&'a ShowtimeData> for ShowtimeDataEntity<'a> {
    fn from(value: &'a ShowtimeData) -> Self {
        Self {
            movie_id: value.movie_id,
            theatre_id: value.theatre_id,
            movie_name: &value.movie_name,
            theatre_name: &value.theatre_name,
            ticket_price: value.ticket_price,
            show_date: date_to_bson(value.show_date),
            daytime: &value.daytime,
            city: &value.city,
        }
    }
}
