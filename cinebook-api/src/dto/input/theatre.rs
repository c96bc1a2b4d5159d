use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Theatre {
    pub theatre_name: String,
    pub city: String,
    pub ticket_price: i64,
    pub rows: i32,
    pub cols: i32,
}
