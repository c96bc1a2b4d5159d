mod user;
mod user_update;

pub use user::*;
pub use user_update::*;
