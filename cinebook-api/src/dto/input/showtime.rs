use serde::Deserialize;
use time::Date;

///
/// Movie and theatre names are filled from referenced records
///
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Showtime {
    pub movie_id: String,
    pub theatre_id: String,
    pub ticket_price: i64,
    #[serde(with = "crate::dto::iso_date")]
    pub show_date: Date,
    pub daytime: String,
}
