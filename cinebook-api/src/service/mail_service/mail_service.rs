use super::Mail;
use crate::error::Error;
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailService: Send + Sync {
    ///
    /// ### Errors
    /// - [Error::Mail] when recipient is invalid or delivery failed
    ///
    async fn send(&self, mail: Mail) -> Result<(), Error>;
}
