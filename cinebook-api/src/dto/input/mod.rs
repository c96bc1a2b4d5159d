mod book_ticket;
mod booked_seats_query;
mod cancellation_email;
mod login_user;
mod movie;
mod register_user;
mod search_query;
mod showtime;
mod showtime_check_query;
mod showtime_filters;
mod theatre;
mod ticket_id;
mod upload_by_link;
mod user_update;
mod with_id;

pub use book_ticket::*;
pub use booked_seats_query::*;
pub use cancellation_email::*;
pub use login_user::*;
pub use movie::*;
pub use register_user::*;
pub use search_query::*;
pub use showtime::*;
pub use showtime_check_query::*;
pub use showtime_filters::*;
pub use theatre::*;
pub use ticket_id::*;
pub use upload_by_link::*;
pub use user_update::*;
pub use with_id::*;
