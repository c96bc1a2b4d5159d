//!
//! Helpers for tests of crates that depend on session tokens
//!

use crate::{util, JwtIssuer};
use bson::oid::ObjectId;
use std::time::Duration;

pub fn create_jwt(
    user_id: ObjectId,
    email: &str,
    jwt_algorithms: String,
    jwt_key: String,
) -> String {
    let jwt_algorithms = util::parse_jwt_algorithms(jwt_algorithms).unwrap();
    let jwt_algorithm = jwt_algorithms
        .first()
        .expect("algorithms list cannot be empty");
    let jwt_key = util::parse_jwt_encoding_key(jwt_algorithm, jwt_key).unwrap();

    JwtIssuer::new(jwt_key, *jwt_algorithm, Duration::from_secs(3600))
        .issue(user_id, email)
        .unwrap()
}
