use super::super::entity::AdminRequestListFindEntity;
use bson::oid::ObjectId;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminRequestList {
    pub user_ids: Vec<ObjectId>,
}

impl From<AdminRequestListFindEntity> for AdminRequestList {
    fn from(value: AdminRequestListFindEntity) -> Self {
        Self {
            user_ids: value.user_ids,
        }
    }
}
