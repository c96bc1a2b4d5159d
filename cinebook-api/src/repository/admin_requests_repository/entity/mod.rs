mod admin_request_list_find_entity;

pub use admin_request_list_find_entity::*;
