use crate::dto::output;
use std::time::Duration;

///
/// Logged in user with the token that authorizes next requests
///
#[derive(Debug)]
pub struct Session {
    pub user: output::User,
    pub token: String,
    pub max_age: Duration,
}
