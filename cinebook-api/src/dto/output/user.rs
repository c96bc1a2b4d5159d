use crate::{auth::Role, repository};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<repository::User> for User {
    fn from(value: repository::User) -> Self {
        Self {
            id: value.id.to_hex(),
            name: value.name,
            email: value.email,
            role: value.role,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use bson::oid::ObjectId;
    use serde_json::json;
    use time::OffsetDateTime;

    #[test]
    fn user_json_serialize_without_password_hash() {
        let id = ObjectId::new();
        let user = User::from(repository::User {
            id,
            name: "name".to_string(),
            email: "a@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: Role::SuperAdmin,
            created_at: OffsetDateTime::now_utc(),
        });

        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(
            json,
            json!({
                "id": id.to_hex(),
                "name": "name",
                "email": "a@example.com",
                "role": "SuperAdmin",
            })
        );
        assert!(json.get("password_hash").is_none());
    }
}
