use sea_orm::{DatabaseBackend, DatabaseConnection, FromQueryResult, Statement};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Inner join of `language_info` and `language_exams` on their shared id.
pub const EXAMS_SQL: &str = "SELECT language_info.language AS language_name, \
language_info.description AS language_description, \
language_exams.exam_name AS exam_name \
FROM language_info \
INNER JOIN language_exams ON language_info.id = language_exams.id";

/// One (language, exam) pair. Columns may be NULL in the source tables.
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, Serialize, Deserialize)]
pub struct ExamListing {
    pub language_name: Option<String>,
    pub language_description: Option<String>,
    pub exam_name: Option<String>,
}

pub fn exams_statement() -> Statement {
    Statement::from_sql_and_values(DatabaseBackend::Postgres, EXAMS_SQL, [])
}

pub async fn fetch_exams(db: &DatabaseConnection) -> Result<Vec<ExamListing>, ModelError> {
    let rows = ExamListing::find_by_statement(exams_statement()).all(db).await?;
    Ok(rows)
}
