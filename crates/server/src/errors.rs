use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

/// Plain-text failure returned by a handler. The cause is logged where it is
/// built; the caller only sees the fixed message.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: &'static str,
}

impl ApiError {
    pub fn internal(message: &'static str) -> Self {
        Self { status: StatusCode::INTERNAL_SERVER_ERROR, message }
    }

    /// Log `cause` under `context` and hide it behind a 500 with `message`.
    pub fn logged(context: &str, cause: impl std::fmt::Display, message: &'static str) -> Self {
        error!(error = %cause, "{context}");
        Self::internal(message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("database unavailable: {0}")]
    Database(String),
    #[error("mail transport: {0}")]
    Mail(#[from] service::mail::MailError),
    #[error("cannot bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
