mod admin_requests_repository;
mod admin_requests_repository_impl;
mod dto;
mod entity;

pub use admin_requests_repository::*;
pub use admin_requests_repository_impl::*;
pub use dto::*;
