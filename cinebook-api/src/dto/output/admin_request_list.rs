use crate::repository;
use serde::Serialize;

#[derive(Debug, PartialEq, Serialize)]
pub struct AdminRequestList {
    pub user_ids: Vec<String>,
}

impl From<repository::AdminRequestList> for AdminRequestList {
    fn from(value: repository::AdminRequestList) -> Self {
        Self {
            user_ids: value.user_ids.iter().map(|id| id.to_hex()).collect(),
        }
    }
}
