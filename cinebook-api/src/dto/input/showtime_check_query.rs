use serde::Deserialize;
use time::Date;

#[derive(Debug, Deserialize)]
pub struct ShowtimeCheckQuery {
    pub movie_id: String,
    pub theatre_id: String,
    #[serde(with = "crate::dto::iso_date")]
    pub show_date: Date,
}
