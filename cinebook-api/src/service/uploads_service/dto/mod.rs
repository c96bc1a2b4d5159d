mod uploaded_file;
mod uploads_service_config;

pub use uploaded_file::*;
pub use uploads_service_config::*;
