mod showtime;
mod showtime_data;

pub use showtime::*;
pub use showtime_data::*;
