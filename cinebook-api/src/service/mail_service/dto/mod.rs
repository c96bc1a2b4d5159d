mod mail;
mod smtp_mail_service_config;

pub use mail::*;
pub use smtp_mail_service_config::*;
