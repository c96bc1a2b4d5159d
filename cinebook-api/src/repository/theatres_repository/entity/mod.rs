mod theatre_data_entity;
mod theatre_find_entity;

pub use theatre_data_entity::*;
pub use theatre_find_entity::*;
