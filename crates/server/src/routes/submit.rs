use axum::{extract::State, http::StatusCode};

use models::client_info::ClientSubmission;
use service::submission::MailStatus;
use tracing::warn;

use crate::errors::ApiError;
use crate::extract::FormOrJson;
use crate::state::AppState;

pub const SUBMITTED: &str = "Form data inserted successfully";

/// Store the submission, then wait for the notification mail. Once the row is
/// in, the answer is 200 whatever the mail outcome.
pub async fn submit_form(
    State(state): State<AppState>,
    FormOrJson(form): FormOrJson<ClientSubmission>,
) -> Result<(StatusCode, &'static str), ApiError> {
    let outcome = state.submissions.submit(form).await.map_err(|e| {
        ApiError::logged("Error inserting form data", e, "Error inserting form data into the database")
    })?;
    if let MailStatus::Failed(reason) = &outcome.mail {
        warn!(%reason, "submission stored without notification mail");
    }
    Ok((StatusCode::OK, SUBMITTED))
}
