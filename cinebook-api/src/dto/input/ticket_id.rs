use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TicketId {
    pub ticket_id: String,
}
