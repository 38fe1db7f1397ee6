//! Service layer for the site backend.
//! - Content reads behind a repository trait (SeaORM in production, in-memory in tests).
//! - Contact-form submissions: persist first, then notify by mail.
//! - Independent of the web framework; the server crate only maps results to HTTP.

pub mod errors;
pub mod content;
pub mod mail;
pub mod submission;
