use axum::{
    extract::{Path, State},
    Json,
};

use models::{exam::ExamListing, Row};
use service::content::HomePage;

use crate::errors::ApiError;
use crate::state::AppState;

/// Services, facts and testimonials in one payload.
pub async fn home(State(state): State<AppState>) -> Result<Json<HomePage>, ApiError> {
    state.content.home().await.map(Json).map_err(|e| {
        ApiError::logged("Error executing query", e, "Error fetching data from the database")
    })
}

pub async fn about(State(state): State<AppState>) -> Result<Json<Vec<Row>>, ApiError> {
    state.content.about().await.map(Json).map_err(|e| {
        ApiError::logged("Error fetching about data", e, "Error fetching about data from the database")
    })
}

/// Languages joined with their exams.
pub async fn exams(State(state): State<AppState>) -> Result<Json<Vec<ExamListing>>, ApiError> {
    state.content.exams().await.map(Json).map_err(|e| {
        ApiError::logged("Error fetching exam data", e, "Error fetching exam data from the database")
    })
}

/// First `contact_info` row, `null` when the table is empty.
pub async fn contact(State(state): State<AppState>) -> Result<Json<Option<Row>>, ApiError> {
    state.content.contact().await.map(Json).map_err(|e| {
        ApiError::logged("Error fetching contact data", e, "Error fetching contact data from the database")
    })
}

pub async fn language(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<Row>>, ApiError> {
    state.content.language(&id).await.map(Json).map_err(|e| {
        ApiError::logged("Error fetching language data", e, "Error fetching language data from the database")
    })
}

pub async fn service_content(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Row>>, ApiError> {
    state.content.service_content(&id).await.map(Json).map_err(|e| {
        ApiError::logged(
            "Error fetching service content data",
            e,
            "Error fetching service content data from the database",
        )
    })
}

pub async fn footer(State(state): State<AppState>) -> Result<Json<Option<Row>>, ApiError> {
    state.content.footer().await.map(Json).map_err(|e| {
        ApiError::logged("Error fetching footer data", e, "Error fetching footer data from the database")
    })
}
