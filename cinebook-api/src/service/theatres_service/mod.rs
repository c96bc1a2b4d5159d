mod theatres_service;
mod theatres_service_impl;

pub use theatres_service::*;
pub use theatres_service_impl::*;
