use super::{Mail, MailService, SmtpMailServiceConfig};
use crate::error::Error;
use anyhow::Context;
use axum::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

pub struct SmtpMailService {
    from: Mailbox,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailService {
    pub fn new(config: SmtpMailServiceConfig) -> anyhow::Result<Self> {
        let from = config
            .from
            .parse::<Mailbox>()
            .context("invalid SMTP sender address")?;

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .context("invalid SMTP relay")?
            .port(config.port);
        if let (Some(username), Some(password)) = (config.username, config.password) {
            builder = builder.credentials(Credentials::new(username, password));
        }

        Ok(Self {
            from,
            transport: builder.build(),
        })
    }

    fn build_message(&self, mail: Mail) -> Result<Message, Error> {
        let to = mail
            .to
            .parse::<Mailbox>()
            .map_err(|err| Error::Mail(format!("invalid recipient: {err}")))?;

        Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(mail.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(mail.body)
            .map_err(|err| Error::Mail(format!("failed to build mail: {err}")))
    }
}

#[async_trait]
impl MailService for SmtpMailService {
    async fn send(&self, mail: Mail) -> Result<(), Error> {
        tracing::info!(to = %mail.to, subject = %mail.subject, "sending mail");

        let message = self.build_message(mail)?;
        self.transport
            .send(message)
            .await
            .map_err(|err| Error::Mail(format!("failed to send mail: {err}")))?;

        tracing::info!("sent mail");

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn service() -> SmtpMailService {
        SmtpMailService::new(SmtpMailServiceConfig {
            host: "localhost".to_string(),
            port: 2525,
            username: None,
            password: None,
            from: "Cinebook <noreply@example.com>".to_string(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn build_message_invalid_recipient() {
        let result = service().build_message(Mail {
            to: "not an address".to_string(),
            subject: "subject".to_string(),
            body: "body".to_string(),
        });

        assert!(matches!(result, Err(Error::Mail(_))));
    }

    #[tokio::test]
    async fn build_message_ok() {
        let result = service().build_message(Mail {
            to: "a@example.com".to_string(),
            subject: "subject".to_string(),
            body: "body".to_string(),
        });

        assert!(result.is_ok());
    }

    #[test]
    fn new_invalid_sender() {
        let result = SmtpMailService::new(SmtpMailServiceConfig {
            host: "localhost".to_string(),
            port: 2525,
            username: None,
            password: None,
            from: "nobody".to_string(),
        });

        assert!(result.is_err());
    }
}
