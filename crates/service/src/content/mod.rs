//! Read-only site content: repository seam plus the per-route service.

pub mod repository;
pub mod repo;
pub mod service;

pub use repository::ContentRepository;
pub use service::{ContentService, HomePage};
