mod dto;
mod log_mail_service;
mod mail_service;
mod smtp_mail_service;

pub use dto::*;
pub use log_mail_service::*;
pub use mail_service::*;
pub use smtp_mail_service::*;
