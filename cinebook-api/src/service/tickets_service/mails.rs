use crate::{repository, service::Mail};

pub fn booking_confirmation(
    to: &str,
    ticket: &repository::Ticket,
    showtime: Option<&repository::Showtime>,
) -> Mail {
    let mut body = format!(
        "Your booking is confirmed.\n\nBooking code: {}\nSeats: {}\nTime: {}\nTotal price: {}\n",
        ticket.booking_code,
        ticket.seat_ids.join(", "),
        ticket.time_slot,
        ticket.total_price,
    );
    if let Some(showtime) = showtime {
        body.push_str(&format!(
            "Movie: {}\nTheatre: {}, {}\nDate: {}\n",
            showtime.movie_name, showtime.theatre_name, showtime.city, showtime.show_date,
        ));
    }

    Mail {
        to: to.to_string(),
        subject: format!("Booking confirmation {}", ticket.booking_code),
        body,
    }
}

pub fn cancellation(to: &str, booking_code: &str, seat_ids: &[String]) -> Mail {
    Mail {
        to: to.to_string(),
        subject: format!("Booking cancelled {booking_code}"),
        body: format!(
            "Your booking has been cancelled.\n\nBooking code: {booking_code}\nSeats: {}\n",
            seat_ids.join(", "),
        ),
    }
}
