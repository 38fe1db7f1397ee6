use async_trait::async_trait;

use super::domain::{MailReceipt, OutgoingMail};
use super::errors::MailError;

/// Sends exactly one message per call.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, mail: OutgoingMail) -> Result<MailReceipt, MailError>;
}

/// Recording mailer for tests: keeps every attempt, optionally rejects all of them.
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct RecordingMailer {
        attempts: Mutex<Vec<OutgoingMail>>,
        reject: AtomicBool,
    }

    impl RecordingMailer {
        pub fn new() -> Self { Self::default() }

        pub fn rejecting() -> Self {
            let m = Self::default();
            m.reject.store(true, Ordering::SeqCst);
            m
        }

        pub fn attempts(&self) -> Vec<OutgoingMail> {
            self.attempts.lock().unwrap_or_else(|e| e.into_inner()).clone()
        }
    }

    #[async_trait]
    impl Mailer for RecordingMailer {
        async fn send(&self, mail: OutgoingMail) -> Result<MailReceipt, MailError> {
            self.attempts.lock().unwrap_or_else(|e| e.into_inner()).push(mail);
            if self.reject.load(Ordering::SeqCst) {
                return Err(MailError::Rejected("535 5.7.8 Username and Password not accepted".into()));
            }
            Ok(MailReceipt { code: "250".into(), message: "2.0.0 OK queued".into() })
        }
    }
}
