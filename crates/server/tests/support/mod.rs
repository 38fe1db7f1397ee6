#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use configs::MailConfig;
use service::content::repository::mock::MockContentRepository;
use service::mail::transport::mock::RecordingMailer;

use server::routes;
use server::startup::build_cors;
use server::state::AppState;

pub struct Harness {
    pub app: Router,
    pub repo: Arc<MockContentRepository>,
    pub mailer: Arc<RecordingMailer>,
}

pub fn mail_config() -> MailConfig {
    MailConfig {
        user: "site@example.com".into(),
        password: "app-password".into(),
        recipient: "office@example.com".into(),
        ..MailConfig::default()
    }
}

pub fn harness(repo: MockContentRepository, mailer: RecordingMailer) -> Harness {
    let repo = Arc::new(repo);
    let mailer = Arc::new(mailer);
    let state = AppState::new(repo.clone(), mailer.clone(), &mail_config());
    let app = routes::build_router(state, build_cors());
    Harness { app, repo, mailer }
}
