mod dto;
mod entity;
mod showtimes_repository;
mod showtimes_repository_impl;

pub use dto::*;
pub use showtimes_repository::*;
pub use showtimes_repository_impl::*;
