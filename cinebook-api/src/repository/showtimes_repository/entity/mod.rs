mod showtime_data_entity;
mod showtime_find_entity;

pub use showtime_data_entity::*;
pub use showtime_find_entity::*;
