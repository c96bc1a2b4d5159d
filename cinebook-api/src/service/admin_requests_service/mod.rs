mod admin_requests_service;
mod admin_requests_service_impl;

pub use admin_requests_service::*;
pub use admin_requests_service_impl::*;
