mod admin_request_list;
mod booked_seats;
mod booked_ticket;
mod movie;
mod showtime;
mod showtime_exists;
mod theatre;
mod user;
mod user_ticket;

pub use admin_request_list::*;
pub use booked_seats::*;
pub use booked_ticket::*;
pub use movie::*;
pub use showtime::*;
pub use showtime_exists::*;
pub use theatre::*;
pub use user::*;
pub use user_ticket::*;
