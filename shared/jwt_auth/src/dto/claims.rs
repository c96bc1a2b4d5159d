use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Hex encoded ObjectId of the user
    pub sub: String,
    pub email: String,
    pub exp: i64,
}
