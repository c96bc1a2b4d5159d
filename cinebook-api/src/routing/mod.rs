mod admin_requests;
mod movies;
mod showtimes;
mod theatres;
mod tickets;
mod uploads;
mod users;

use crate::application::{ApplicationMiddleware, ApplicationState};
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::path::Path;
use tower_http::services::ServeDir;

pub fn routing(
    application_middleware: &ApplicationMiddleware,
    uploads_directory: &Path,
) -> Router<ApplicationState> {
    Router::new()
        .route("/profile", get(users::profile))
        .route("/getAllUsers", get(users::find_all))
        .route("/getUser/:id", get(users::find))
        .route("/updateUser/:id", put(users::update))
        .route("/upload-by-link", post(uploads::upload_by_link))
        .route("/upload", post(uploads::upload))
        .route(
            "/adminMovies",
            post(movies::create).get(movies::find_own).put(movies::update),
        )
        .route("/adminMovies/:id", delete(movies::delete))
        .route(
            "/adminTheatres",
            post(theatres::create)
                .get(theatres::find_own)
                .put(theatres::update),
        )
        .route("/adminTheatres/:id", delete(theatres::delete))
        .route(
            "/adminShowtimes",
            post(showtimes::create)
                .get(showtimes::find_own)
                .put(showtimes::update),
        )
        .route("/adminShowtimes/check", get(showtimes::check))
        .route("/adminShowtimes/:id", delete(showtimes::delete))
        .route("/findShowtimes", get(showtimes::find_for_movie))
        .route("/createAdminList", post(admin_requests::create_list))
        .route("/adminList", get(admin_requests::find))
        .route(
            "/adminList/:id",
            post(admin_requests::add).delete(admin_requests::remove),
        )
        .route("/bookTicket", post(tickets::book))
        .route("/myTickets", get(tickets::find_own))
        .route("/tickets/:id", delete(tickets::cancel))
        .route(
            "/sendBookingConfirmationEmail",
            post(tickets::send_booking_confirmation),
        )
        .route("/sendCancellationEmail", post(tickets::send_cancellation))
        .route_layer(application_middleware.auth.clone())
        .route("/test", get(test))
        .route("/register", post(users::register))
        .route("/login", post(users::login))
        .route("/logout", post(users::logout))
        .route("/", get(movies::find_all))
        .route("/search", get(movies::search))
        .route("/adminMovies/:id", get(movies::find))
        .route("/adminTheatres/:id", get(theatres::find))
        .route("/adminShowtimes/:id", get(showtimes::find))
        .route("/bookedSeats", get(tickets::find_booked_seats))
        .nest_service("/uploads", ServeDir::new(uploads_directory))
}

async fn test() -> &'static str {
    "test ok"
}
