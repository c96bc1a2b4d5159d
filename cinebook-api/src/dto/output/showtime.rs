use crate::repository;
use serde::Serialize;
use time::Date;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Showtime {
    pub id: String,
    pub owner_id: String,
    pub movie_id: String,
    pub theatre_id: String,
    pub movie_name: String,
    pub theatre_name: String,
    pub ticket_price: i64,
    #[serde(with = "crate::dto::iso_date")]
    pub show_date: Date,
    pub daytime: String,
    pub city: String,
}

impl From<repository::Showtime> for Showtime {
    fn from(value: repository::Showtime) -> Self {
        Self {
            id: value.id.to_hex(),
            owner_id: value.owner_id.to_hex(),
            movie_id: value.movie_id.to_hex(),
            theatre_id: value.theatre_id.to_hex(),
            movie_name: value.movie_name,
            theatre_name: value.theatre_name,
            ticket_price: value.ticket_price,
            show_date: value.show_date,
            daytime: value.daytime,
            city: value.city,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use bson::oid::ObjectId;
    use time::macros::date;

    #[test]
    fn showtime_json_serialize_date() {
        let showtime = Showtime::from(repository::Showtime {
            id: ObjectId::new(),
            owner_id: ObjectId::new(),
            movie_id: ObjectId::new(),
            theatre_id: ObjectId::new(),
            movie_name: "Arrival".to_string(),
            theatre_name: "Grand".to_string(),
            ticket_price: 200,
            show_date: date!(2024 - 05 - 07),
            daytime: "18:30".to_string(),
            city: "Pune".to_string(),
        });

        let json = serde_json::to_value(&showtime).unwrap();

        assert_eq!(json["show_date"], "2024-05-07");
        assert_eq!(json["daytime"], "18:30");
    }
}
