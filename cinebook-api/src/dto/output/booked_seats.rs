use serde::Serialize;

#[derive(Debug, PartialEq, Serialize)]
pub struct BookedSeats {
    pub seat_ids: Vec<String>,
}
