use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;

use configs::MailConfig;

use super::domain::{MailReceipt, OutgoingMail};
use super::errors::MailError;
use super::transport::Mailer;

/// SMTP relay client configured once at startup from [`MailConfig`].
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Implicit-TLS relay (port 465) with login credentials.
    pub fn from_config(cfg: &MailConfig) -> Result<Self, MailError> {
        let creds = Credentials::new(cfg.user.clone(), cfg.password.clone());
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&cfg.smtp_host)?
            .credentials(creds)
            .build();
        Ok(Self { transport })
    }
}

/// Turn an [`OutgoingMail`] into a plain-text MIME message.
pub fn build_message(mail: &OutgoingMail) -> Result<Message, MailError> {
    let from: Mailbox = mail.from.parse()?;
    let to: Mailbox = mail.to.parse()?;
    let message = Message::builder()
        .from(from)
        .to(to)
        .subject(mail.subject.clone())
        .header(ContentType::TEXT_PLAIN)
        .body(mail.body.clone())?;
    Ok(message)
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, mail: OutgoingMail) -> Result<MailReceipt, MailError> {
        let message = build_message(&mail)?;
        debug!(to = %mail.to, "relaying notification mail");
        let response = self.transport.send(message).await?;
        if !response.is_positive() {
            return Err(MailError::Rejected(response.message().collect::<Vec<_>>().join(" ")));
        }
        Ok(MailReceipt {
            code: response.code().to_string(),
            message: response.message().collect::<Vec<_>>().join(" "),
        })
    }
}
