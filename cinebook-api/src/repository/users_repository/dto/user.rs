use super::super::entity::UserFindEntity;
use crate::auth::Role;
use bson::oid::ObjectId;
use time::OffsetDateTime;

#[derive(Debug, Clone)]
pub struct User {
    pub id: ObjectId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub created_at: OffsetDateTime,
}

impl From<UserFindEntity> for User {
    fn from(value: UserFindEntity) -> Self {
        Self {
            id: value._id,
            name: value.name,
            email: value.email,
            password_hash: value.password_hash,
            role: value.role,
            created_at: value.created_at.into(),
        }
    }
}
