use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

pub const INSERT_SQL: &str =
    "INSERT INTO client_info (name, email, phone, subject, message) VALUES ($1, $2, $3, $4, $5)";

/// A contact-form submission. Nothing is validated; absent fields are stored as NULL.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSubmission {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

pub fn insert_statement(form: &ClientSubmission) -> Statement {
    Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        INSERT_SQL,
        [
            form.name.clone().into(),
            form.email.clone().into(),
            form.phone.clone().into(),
            form.subject.clone().into(),
            form.message.clone().into(),
        ],
    )
}

/// Append exactly one `client_info` row.
pub async fn insert(db: &DatabaseConnection, form: &ClientSubmission) -> Result<(), ModelError> {
    db.execute(insert_statement(form)).await?;
    Ok(())
}
