mod admin_request_list;

pub use admin_request_list::*;
