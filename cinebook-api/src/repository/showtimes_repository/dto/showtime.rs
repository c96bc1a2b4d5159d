use super::{super::entity::ShowtimeFindEntity, ShowtimeData};
use crate::{auth::Owned, repository::bson_to_date};
use bson::oid::ObjectId;
use time::Date;

#[derive(Debug, Clone, PartialEq)]
pub struct Showtime {
    pub id: ObjectId,
    pub owner_id: ObjectId,
    pub movie_id: ObjectId,
    pub theatre_id: ObjectId,
    pub movie_name: String,
    pub theatre_name: String,
    pub ticket_price: i64,
    pub show_date: Date,
    pub daytime: String,
    pub city: String,
}

impl Showtime {
    pub fn new(id: ObjectId, owner_id: ObjectId, data: ShowtimeData) -> Self {
        Self {
            id,
            owner_id,
            movie_id: data.movie_id,
            theatre_id: data.theatre_id,
            movie_name: data.movie_name,
            theatre_name: data.theatre_name,
            ticket_price: data.ticket_price,
            show_date: data.show_date,
            daytime: data.daytime,
            city: data.city,
        }
    }
}

impl Owned for Showtime {
    fn owner_id(&self) -> ObjectId {
        self.owner_id
    }
}

impl From<ShowtimeFindEntity> for Showtime {
    fn from(value: ShowtimeFindEntity) -> Self {
        Self {
            id: value._id,
            owner_id: value.owner_id,
            movie_id: value.movie_id,
            theatre_id: value.theatre_id,
            movie_name: value.movie_name,
            theatre_name: value.theatre_name,
            ticket_price: value.ticket_price,
            show_date: bson_to_date(value.show_date),
            daytime: value.daytime,
            city: value.city,
        }
    }
}
