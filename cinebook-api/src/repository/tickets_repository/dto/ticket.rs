use super::super::entity::TicketFindEntity;
use crate::auth::Owned;
use bson::oid::ObjectId;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: ObjectId,
    pub booking_code: Uuid,
    pub showtime_id: ObjectId,
    pub time_slot: String,
    pub seat_ids: Vec<String>,
    pub ticket_price: i64,
    pub total_price: i64,
    pub user_id: ObjectId,
    pub booked_at: OffsetDateTime,
}

impl Owned for Ticket {
    fn owner_id(&self) -> ObjectId {
        self.user_id
    }
}

impl From<TicketFindEntity> for Ticket {
    fn from(value: TicketFindEntity) -> Self {
        Self {
            id: value._id,
            booking_code: value.booking_code.into(),
            showtime_id: value.showtime_id,
            time_slot: value.time_slot,
            seat_ids: value.seat_ids,
            ticket_price: value.ticket_price,
            total_price: value.total_price,
            user_id: value.user_id,
            booked_at: value.booked_at.into(),
        }
    }
}
