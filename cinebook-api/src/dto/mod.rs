//!
//! Module with all dtos that are passed between server and users
//!

pub mod input;
pub mod output;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");
