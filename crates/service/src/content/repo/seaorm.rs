use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::{
    client_info::{self, ClientSubmission},
    content::{self, ContentTable, KeyedTable},
    exam::{self, ExamListing},
    Row,
};

use crate::content::repository::ContentRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository implementation.
pub struct SeaOrmContentRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmContentRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl ContentRepository for SeaOrmContentRepository {
    async fn list(&self, table: ContentTable) -> Result<Vec<Row>, ServiceError> {
        Ok(content::fetch_all(&self.db, table).await?)
    }

    async fn list_by_id(&self, table: KeyedTable, id: &str) -> Result<Vec<Row>, ServiceError> {
        Ok(content::fetch_by_id(&self.db, table, id).await?)
    }

    async fn list_exams(&self) -> Result<Vec<ExamListing>, ServiceError> {
        Ok(exam::fetch_exams(&self.db).await?)
    }

    async fn insert_client_info(&self, form: &ClientSubmission) -> Result<(), ServiceError> {
        Ok(client_info::insert(&self.db, form).await?)
    }
}
