use crate::repository;
use serde::Serialize;
use time::{Date, OffsetDateTime};

///
/// Ticket joined with its showtime, movie and theatre.
/// Details of records that no longer exist are left empty.
///
#[derive(Debug, PartialEq, Serialize)]
pub struct UserTicket {
    pub id: String,
    pub booking_code: String,
    pub showtime_id: String,
    pub time_slot: String,
    pub seat_ids: Vec<String>,
    pub ticket_price: i64,
    pub total_price: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub booked_at: OffsetDateTime,

    #[serde(with = "crate::dto::iso_date::option")]
    pub show_date: Option<Date>,
    pub city: String,
    pub movie_title: String,
    pub poster: Option<String>,
    pub theatre_name: String,
}

impl UserTicket {
    pub fn new(
        ticket: repository::Ticket,
        showtime: Option<&repository::Showtime>,
        movie: Option<&repository::Movie>,
        theatre: Option<&repository::Theatre>,
    ) -> Self {
        let city = theatre
            .map(|theatre| theatre.city.clone())
            .or_else(|| showtime.map(|showtime| showtime.city.clone()))
            .unwrap_or_default();
        let movie_title = movie
            .map(|movie| movie.title.clone())
            .or_else(|| showtime.map(|showtime| showtime.movie_name.clone()))
            .unwrap_or_default();
        let theatre_name = theatre
            .map(|theatre| theatre.theatre_name.clone())
            .or_else(|| showtime.map(|showtime| showtime.theatre_name.clone()))
            .unwrap_or_default();

        Self {
            id: ticket.id.to_hex(),
            booking_code: ticket.booking_code.to_string(),
            showtime_id: ticket.showtime_id.to_hex(),
            time_slot: ticket.time_slot,
            seat_ids: ticket.seat_ids,
            ticket_price: ticket.ticket_price,
            total_price: ticket.total_price,
            booked_at: ticket.booked_at,
            show_date: showtime.map(|showtime| showtime.show_date),
            city,
            movie_title,
            poster: movie.and_then(|movie| movie.photos.first().cloned()),
            theatre_name,
        }
    }
}
