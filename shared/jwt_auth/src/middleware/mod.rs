mod jwt_auth_future;
mod jwt_auth_layer;
mod jwt_auth_service;

pub use jwt_auth_future::*;
pub use jwt_auth_layer::*;
pub use jwt_auth_service::*;
