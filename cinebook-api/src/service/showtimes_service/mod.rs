mod showtimes_service;
mod showtimes_service_impl;

pub use showtimes_service::*;
pub use showtimes_service_impl::*;
