use serde::Deserialize;
use time::Date;

#[derive(Debug, Deserialize)]
pub struct ShowtimeFilters {
    pub movie_id: String,
    pub city: Option<String>,
    #[serde(default, with = "crate::dto::iso_date::option")]
    pub date: Option<Date>,
}
