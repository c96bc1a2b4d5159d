use bson::{oid::ObjectId, DateTime, Uuid};
use serde::Serialize;

#[derive(Serialize)]
pub struct TicketInsertEntity<'a> {
    pub booking_code: Uuid,

    pub showtime_id: ObjectId,
    pub time_slot: &'a str,
    pub seat_ids: &'a [String],

    pub ticket_price: i64,
    pub total_price: i64,

    pub user_id: ObjectId,
    pub booked_at: DateTime,
}
