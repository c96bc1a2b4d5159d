use bson::oid::ObjectId;
use time::Date;

///
/// Showtime fields with names already resolved from movie and theatre
///
#[derive(Debug, Clone, PartialEq)]
pub struct ShowtimeData {
    pub movie_id: ObjectId,
    pub theatre_id: ObjectId,
    pub movie_name: String,
    pub theatre_name: String,
    pub ticket_price: i64,
    pub show_date: Date,
    pub daytime: String,
    pub city: String,
}
