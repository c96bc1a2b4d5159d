//!
//! All roles used within application
//!

use serde::{Deserialize, Serialize};
use strum::AsRefStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
pub enum Role {
    Customer,
    Admin,
    SuperAdmin,
}

impl Role {
    ///
    /// Roles that are allowed to create movies, theatres and showtimes
    ///
    pub const CATALOG_MANAGERS: &'static [Role] = &[Role::Admin, Role::SuperAdmin];
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn role_names() {
        assert_eq!(Role::Customer.as_ref(), "Customer");
        assert_eq!(Role::Admin.as_ref(), "Admin");
        assert_eq!(Role::SuperAdmin.as_ref(), "SuperAdmin");
    }

    #[test]
    fn role_serialized_as_name() {
        let json = serde_json::to_string(&Role::SuperAdmin).unwrap();

        assert_eq!(json, r#""SuperAdmin""#);
    }
}
