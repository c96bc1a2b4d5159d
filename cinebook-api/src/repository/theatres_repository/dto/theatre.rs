use super::super::entity::TheatreFindEntity;
use crate::auth::Owned;
use bson::oid::ObjectId;

#[derive(Debug, Clone, PartialEq)]
pub struct Theatre {
    pub id: ObjectId,
    pub owner_id: ObjectId,
    pub theatre_name: String,
    pub city: String,
    pub ticket_price: i64,
    pub rows: i32,
    pub cols: i32,
}

impl Owned for Theatre {
    fn owner_id(&self) -> ObjectId {
        self.owner_id
    }
}

impl From<TheatreFindEntity> for Theatre {
    fn from(value: TheatreFindEntity) -> Self {
        Self {
            id: value._id,
            owner_id: value.owner_id,
            theatre_name: value.theatre_name,
            city: value.city,
            ticket_price: value.ticket_price,
            rows: value.rows,
            cols: value.cols,
        }
    }
}
