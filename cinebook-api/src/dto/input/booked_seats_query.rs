use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct BookedSeatsQuery {
    pub showtime_id: Option<String>,
    pub time_slot: Option<String>,
}
