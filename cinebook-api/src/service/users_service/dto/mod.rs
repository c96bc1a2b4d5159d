mod session;
mod users_service_config;

pub use session::*;
pub use users_service_config::*;
