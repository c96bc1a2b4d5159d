mod movies_service;
mod movies_service_impl;

pub use movies_service::*;
pub use movies_service_impl::*;
