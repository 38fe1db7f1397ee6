//! Contact-form submissions.
//!
//! Ordering contract: persist the `client_info` row, then relay one
//! notification mail. The mail outcome never undoes the insert and never
//! turns an accepted submission into a failure; it is only reported back.

use std::sync::Arc;

use tracing::{error, info, instrument};

use configs::MailConfig;
use models::client_info::ClientSubmission;

use crate::content::repository::ContentRepository;
use crate::errors::ServiceError;
use crate::mail::{MailReceipt, Mailer, OutgoingMail};

/// Result of the notification step of an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MailStatus {
    Delivered(MailReceipt),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub mail: MailStatus,
}

pub struct SubmissionService {
    repo: Arc<dyn ContentRepository>,
    mailer: Arc<dyn Mailer>,
    sender: String,
    recipient: String,
}

impl SubmissionService {
    pub fn new(
        repo: Arc<dyn ContentRepository>,
        mailer: Arc<dyn Mailer>,
        sender: impl Into<String>,
        recipient: impl Into<String>,
    ) -> Self {
        Self { repo, mailer, sender: sender.into(), recipient: recipient.into() }
    }

    /// Sender is the mail account itself, recipient the configured office address.
    pub fn from_config(repo: Arc<dyn ContentRepository>, mailer: Arc<dyn Mailer>, cfg: &MailConfig) -> Self {
        Self::new(repo, mailer, cfg.user.clone(), cfg.recipient.clone())
    }

    /// Insert, then mail. An insert error returns before any mail is attempted.
    #[instrument(skip(self, form))]
    pub async fn submit(&self, form: ClientSubmission) -> Result<SubmissionOutcome, ServiceError> {
        info!("Inserting form data into the database");
        self.repo.insert_client_info(&form).await?;

        let mail = OutgoingMail::for_submission(&form, &self.sender, &self.recipient);
        let status = match self.mailer.send(mail).await {
            Ok(receipt) => {
                info!(response = %receipt, "Email sent");
                MailStatus::Delivered(receipt)
            }
            Err(e) => {
                error!(error = %e, "Error sending email");
                MailStatus::Failed(e.to_string())
            }
        };
        Ok(SubmissionOutcome { mail: status })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::repository::mock::MockContentRepository;
    use crate::mail::transport::mock::RecordingMailer;

    fn form() -> ClientSubmission {
        ClientSubmission {
            name: Some("Ana".into()),
            email: Some("ana@example.com".into()),
            phone: Some("555".into()),
            subject: Some("Evening classes".into()),
            message: Some("Do you offer them?".into()),
        }
    }

    fn service(repo: &Arc<MockContentRepository>, mailer: &Arc<RecordingMailer>) -> SubmissionService {
        SubmissionService::new(repo.clone(), mailer.clone(), "site@example.com", "office@example.com")
    }

    #[tokio::test]
    async fn accepted_submission_inserts_once_and_mails_once() {
        let repo = Arc::new(MockContentRepository::new());
        let mailer = Arc::new(RecordingMailer::new());
        let outcome = service(&repo, &mailer).submit(form()).await.unwrap();

        assert!(matches!(outcome.mail, MailStatus::Delivered(_)));
        assert_eq!(repo.inserted(), vec![form()]);
        let attempts = mailer.attempts();
        assert_eq!(attempts.len(), 1);
        assert_eq!(attempts[0].from, "site@example.com");
        assert_eq!(attempts[0].to, "office@example.com");
        assert_eq!(attempts[0].subject, "Evening classes");
        assert!(attempts[0].body.contains("Do you offer them?"));
    }

    #[tokio::test]
    async fn mail_failure_keeps_the_row() {
        let repo = Arc::new(MockContentRepository::new());
        let mailer = Arc::new(RecordingMailer::rejecting());
        let outcome = service(&repo, &mailer).submit(form()).await.unwrap();

        assert!(matches!(outcome.mail, MailStatus::Failed(_)));
        assert_eq!(repo.inserted().len(), 1);
        assert_eq!(mailer.attempts().len(), 1);
    }

    #[tokio::test]
    async fn insert_failure_skips_mail() {
        let repo = Arc::new(MockContentRepository::new().failing_inserts());
        let mailer = Arc::new(RecordingMailer::new());
        let res = service(&repo, &mailer).submit(form()).await;

        assert!(res.is_err());
        assert!(repo.inserted().is_empty());
        assert!(mailer.attempts().is_empty());
    }

    #[tokio::test]
    async fn from_config_uses_account_as_sender() {
        let repo = Arc::new(MockContentRepository::new());
        let mailer = Arc::new(RecordingMailer::new());
        let cfg = MailConfig {
            user: "account@example.com".into(),
            recipient: "desk@example.com".into(),
            ..MailConfig::default()
        };
        SubmissionService::from_config(repo, mailer.clone(), &cfg)
            .submit(ClientSubmission::default())
            .await
            .unwrap();
        let sent = mailer.attempts();
        assert_eq!(sent[0].from, "account@example.com");
        assert_eq!(sent[0].to, "desk@example.com");
    }
}
