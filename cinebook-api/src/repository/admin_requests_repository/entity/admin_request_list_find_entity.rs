use bson::oid::ObjectId;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct AdminRequestListFindEntity {
    #[serde(default)]
    pub user_ids: Vec<ObjectId>,
}
