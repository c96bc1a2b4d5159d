use super::{Mail, MailService};
use crate::error::Error;
use axum::async_trait;

///
/// Mail service used when SMTP is not configured.
/// Mails are only written to the log.
///
pub struct LogMailService;

#[async_trait]
impl MailService for LogMailService {
    async fn send(&self, mail: Mail) -> Result<(), Error> {
        tracing::info!(to = %mail.to, subject = %mail.subject, "mail not sent, SMTP disabled");
        tracing::trace!(body = %mail.body);

        Ok(())
    }
}
