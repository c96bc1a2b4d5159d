use serde::Deserialize;

///
/// Details of a ticket that has already been cancelled
///
#[derive(Debug, Clone, Deserialize)]
pub struct CancellationEmail {
    pub booking_code: String,
    pub seat_ids: Vec<String>,
}
