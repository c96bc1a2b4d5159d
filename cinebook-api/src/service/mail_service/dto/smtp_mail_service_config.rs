#[derive(Debug, Clone)]
pub struct SmtpMailServiceConfig {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub from: String,
}
