use crate::repository;
use serde::Serialize;

#[derive(Debug, PartialEq, Serialize)]
pub struct BookedTicket {
    pub id: String,
    pub booking_code: String,
    pub seat_ids: Vec<String>,
    pub ticket_price: i64,
    pub total_price: i64,
}

impl From<repository::Ticket> for BookedTicket {
    fn from(value: repository::Ticket) -> Self {
        Self {
            id: value.id.to_hex(),
            booking_code: value.booking_code.to_string(),
            seat_ids: value.seat_ids,
            ticket_price: value.ticket_price,
            total_price: value.total_price,
        }
    }
}
