use crate::auth::Role;
use bson::DateTime;
use serde::Serialize;

#[derive(Serialize)]
pub struct UserInsertEntity<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub role: Role,

    pub created_at: DateTime,
}
