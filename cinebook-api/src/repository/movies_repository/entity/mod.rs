mod movie_data_entity;
mod movie_find_entity;

pub use movie_data_entity::*;
pub use movie_find_entity::*;
