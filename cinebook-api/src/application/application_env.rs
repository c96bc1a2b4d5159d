use crate::service::SmtpMailServiceConfig;
use anyhow::anyhow;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey};
use jwt_auth::util::{parse_jwt_algorithms, parse_jwt_encoding_key, parse_jwt_key};
use std::{net::SocketAddr, path::PathBuf, time::Duration};

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub bind_address: SocketAddr,

    pub db_connection_string: String,
    pub db_name: String,

    pub max_http_content_len: usize,

    /// Algorithms must belong to the same family
    pub jwt_algorithms: Vec<Algorithm>,
    pub jwt_key: DecodingKey,
    pub jwt_encoding_key: EncodingKey,
    pub jwt_lifespan: Duration,

    pub cookie_secure: bool,
    pub cors_origins: Vec<String>,

    pub uploads_directory: PathBuf,

    pub super_admin_emails: Vec<String>,

    /// Mails are only logged when SMTP is not configured
    pub smtp: Option<SmtpMailServiceConfig>,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("CINEBOOK_API_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("CINEBOOK_API_LOG_FILENAME")?;
        let bind_address = Self::env_var("CINEBOOK_API_BIND_ADDRESS")?.parse()?;
        let db_connection_string = Self::env_var("CINEBOOK_API_DB_CONNECTION_STRING")?;
        let db_name = Self::env_var("CINEBOOK_API_DB_NAME")?;
        let max_http_content_len = Self::env_var("CINEBOOK_API_MAX_HTTP_CONTENT_LEN")?.parse()?;
        let jwt_algorithms = parse_jwt_algorithms(Self::env_var("CINEBOOK_API_JWT_ALGORITHMS")?)?;
        let jwt_algorithm = jwt_algorithms.first().ok_or(anyhow!(
            "CINEBOOK_API_JWT_ALGORITHMS need to contain at least one algorithm"
        ))?;
        let jwt_key = parse_jwt_key(jwt_algorithm, Self::env_var("CINEBOOK_API_JWT_KEY")?)?;
        let jwt_encoding_key = parse_jwt_encoding_key(
            jwt_algorithm,
            Self::env_var("CINEBOOK_API_JWT_ENCODE_KEY")?,
        )?;
        let jwt_lifespan = Self::env_var("CINEBOOK_API_JWT_LIFESPAN")?.parse()?;
        let jwt_lifespan = Duration::from_secs(jwt_lifespan);
        let cookie_secure = Self::env_var("CINEBOOK_API_COOKIE_SECURE")?.parse()?;
        let cors_origins = Self::split_list(&Self::env_var("CINEBOOK_API_CORS_ORIGINS")?);
        let uploads_directory = Self::env_var("CINEBOOK_API_UPLOADS_DIRECTORY")?.into();
        let super_admin_emails = Self::split_list(&Self::env_var(
            "CINEBOOK_API_SUPER_ADMIN_EMAILS",
        )?)
        .into_iter()
        .map(|email| email.to_lowercase())
        .collect();
        let smtp = Self::parse_smtp()?;

        Ok(Self {
            log_directory,
            log_filename,
            bind_address,
            db_connection_string,
            db_name,
            max_http_content_len,
            jwt_algorithms,
            jwt_key,
            jwt_encoding_key,
            jwt_lifespan,
            cookie_secure,
            cors_origins,
            uploads_directory,
            super_admin_emails,
            smtp,
        })
    }

    fn parse_smtp() -> anyhow::Result<Option<SmtpMailServiceConfig>> {
        let Some(host) = Self::optional_env_var("CINEBOOK_API_SMTP_HOST") else {
            return Ok(None);
        };
        let port = Self::env_var("CINEBOOK_API_SMTP_PORT")?.parse()?;
        let username = Self::optional_env_var("CINEBOOK_API_SMTP_USERNAME");
        let password = Self::optional_env_var("CINEBOOK_API_SMTP_PASSWORD");
        let from = Self::env_var("CINEBOOK_API_SMTP_FROM")?;

        Ok(Some(SmtpMailServiceConfig {
            host,
            port,
            username,
            password,
            from,
        }))
    }

    fn split_list(value: &str) -> Vec<String> {
        value
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }

    fn optional_env_var(name: &'static str) -> Option<String> {
        std::env::var(name).ok().filter(|value| !value.is_empty())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn split_list_skips_empty_items() {
        let list = ApplicationEnv::split_list(" http://a.com, ,http://b.com,");

        assert_eq!(list, vec!["http://a.com", "http://b.com"]);
    }
}
