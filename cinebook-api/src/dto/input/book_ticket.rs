use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct BookTicket {
    pub showtime_id: String,
    pub time_slot: String,
    pub seat_ids: Vec<String>,
    ///
    /// When present must match price of the showtime
    ///
    pub ticket_price: Option<i64>,
}
