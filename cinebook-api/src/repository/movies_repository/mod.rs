mod dto;
mod entity;
mod movies_repository;
mod movies_repository_impl;

pub use dto::*;
pub use movies_repository::*;
pub use movies_repository_impl::*;
