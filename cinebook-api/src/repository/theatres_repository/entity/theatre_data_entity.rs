use crate::dto::input;
use serde::Serialize;

#[derive(Serialize)]
pub struct TheatreDataEntity<'a> {
    pub theatre_name: &'a str,
    pub city: &'a str,
    pub ticket_price: i64,
    pub rows: i32,
    pub cols: i32,
}

impl<'a> From<&'a input::Theatre> for TheatreDataEntity<'a> {
    fn from(value: &'a input::Theatre) -> Self {
        Self {
            theatre_name: &value.theatre_name,
            city: &value.city,
            ticket_price: value.ticket_price,
            rows: value.rows,
            cols: value.cols,
        }
    }
}
