use crate::auth::Role;
use bson::{oid::ObjectId, DateTime};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct UserFindEntity {
    pub _id: ObjectId,

    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,

    pub created_at: DateTime,
}
