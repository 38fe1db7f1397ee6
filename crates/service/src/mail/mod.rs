//! Outbound notification mail: message shape, transport seam and the SMTP transport.

pub mod domain;
pub mod errors;
pub mod transport;
pub mod smtp;

pub use domain::{MailReceipt, OutgoingMail};
pub use errors::MailError;
pub use smtp::SmtpMailer;
pub use transport::Mailer;
