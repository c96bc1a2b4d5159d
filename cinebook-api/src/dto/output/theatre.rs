use crate::repository;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Theatre {
    pub id: String,
    pub owner_id: String,
    pub theatre_name: String,
    pub city: String,
    pub ticket_price: i64,
    pub rows: i32,
    pub cols: i32,
}

impl From<repository::Theatre> for Theatre {
    fn from(value: repository::Theatre) -> Self {
        Self {
            id: value.id.to_hex(),
            owner_id: value.owner_id.to_hex(),
            theatre_name: value.theatre_name,
            city: value.city,
            ticket_price: value.ticket_price,
            rows: value.rows,
            cols: value.cols,
        }
    }
}
