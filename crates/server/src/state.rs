use std::sync::Arc;

use configs::MailConfig;
use service::content::{ContentRepository, ContentService};
use service::mail::Mailer;
use service::submission::SubmissionService;

/// Shared by every handler; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<ContentService>,
    pub submissions: Arc<SubmissionService>,
}

impl AppState {
    pub fn new(repo: Arc<dyn ContentRepository>, mailer: Arc<dyn Mailer>, mail: &MailConfig) -> Self {
        Self {
            content: Arc::new(ContentService::new(Arc::clone(&repo))),
            submissions: Arc::new(SubmissionService::from_config(repo, mailer, mail)),
        }
    }
}
