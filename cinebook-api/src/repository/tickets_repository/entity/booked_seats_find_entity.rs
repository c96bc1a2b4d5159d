use serde::Deserialize;

#[derive(Deserialize)]
pub struct BookedSeatsFindEntity {
    pub seat_ids: Vec<String>,
}
