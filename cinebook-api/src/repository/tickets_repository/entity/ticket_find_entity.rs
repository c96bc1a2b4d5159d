use bson::{oid::ObjectId, DateTime, Uuid};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct TicketFindEntity {
    pub _id: ObjectId,
    pub booking_code: Uuid,

    pub showtime_id: ObjectId,
    pub time_slot: String,
    pub seat_ids: Vec<String>,

    pub ticket_price: i64,
    pub total_price: i64,

    pub user_id: ObjectId,
    pub booked_at: DateTime,
}
