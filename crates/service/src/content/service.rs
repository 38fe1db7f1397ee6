use std::sync::Arc;

use serde::Serialize;
use tracing::{info, instrument};

use models::{
    content::{ContentTable, KeyedTable},
    exam::ExamListing,
    Row,
};

use crate::content::repository::ContentRepository;
use crate::errors::ServiceError;

/// Landing page payload: three independent listings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomePage {
    pub services: Vec<Row>,
    pub fact: Vec<Row>,
    pub testimonials: Vec<Row>,
}

/// One method per read route. Single-row routes take the first row and
/// report `None` for an empty result; nothing here is a not-found error.
pub struct ContentService {
    repo: Arc<dyn ContentRepository>,
}

impl ContentService {
    pub fn new(repo: Arc<dyn ContentRepository>) -> Self { Self { repo } }

    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use models::content::ContentTable;
    /// use service::content::{ContentService, repository::mock::MockContentRepository};
    /// let repo = MockContentRepository::new()
    ///     .with_table(ContentTable::Services, vec![serde_json::json!({"id": 1})]);
    /// let svc = ContentService::new(Arc::new(repo));
    /// let home = tokio_test::block_on(svc.home()).unwrap();
    /// assert_eq!(home.services.len(), 1);
    /// assert!(home.fact.is_empty());
    /// ```
    pub async fn home(&self) -> Result<HomePage, ServiceError> {
        info!("Fetching services data from the database");
        let services = self.repo.list(ContentTable::Services).await?;
        info!("Fetching fact data from the database");
        let fact = self.repo.list(ContentTable::Facts).await?;
        info!("Fetching testimonials data from the database");
        let testimonials = self.repo.list(ContentTable::Testimonials).await?;
        Ok(HomePage { services, fact, testimonials })
    }

    pub async fn about(&self) -> Result<Vec<Row>, ServiceError> {
        info!("Fetching about data from the database");
        self.repo.list(ContentTable::About).await
    }

    pub async fn exams(&self) -> Result<Vec<ExamListing>, ServiceError> {
        info!("Fetching exam data from the database");
        self.repo.list_exams().await
    }

    pub async fn contact(&self) -> Result<Option<Row>, ServiceError> {
        info!("Fetching contact data from the database");
        Ok(first(self.repo.list(ContentTable::ContactInfo).await?))
    }

    pub async fn footer(&self) -> Result<Option<Row>, ServiceError> {
        info!("Fetching footer data from the database");
        Ok(first(self.repo.list(ContentTable::Footer).await?))
    }

    #[instrument(skip(self))]
    pub async fn language(&self, id: &str) -> Result<Option<Row>, ServiceError> {
        info!("Fetching language data with ID {id} from the database");
        Ok(first(self.repo.list_by_id(KeyedTable::LanguageContent, id).await?))
    }

    #[instrument(skip(self))]
    pub async fn service_content(&self, id: &str) -> Result<Vec<Row>, ServiceError> {
        info!("Fetching service content data with ID {id} from the database");
        let rows = self.repo.list_by_id(KeyedTable::ServicesContent, id).await?;
        info!(rows = rows.len(), "service content fetched");
        Ok(rows)
    }
}

fn first(rows: Vec<Row>) -> Option<Row> {
    rows.into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::repository::mock::MockContentRepository;
    use serde_json::json;

    fn svc(repo: MockContentRepository) -> (ContentService, Arc<MockContentRepository>) {
        let repo = Arc::new(repo);
        (ContentService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn home_aggregates_three_listings() {
        let (svc, repo) = svc(
            MockContentRepository::new()
                .with_table(ContentTable::Services, vec![json!({"id": 1, "title": "Courses"})])
                .with_table(ContentTable::Facts, vec![json!({"id": 9, "fact": "Über 7000 Sprachen"})])
                .with_table(ContentTable::Testimonials, vec![json!({"id": 4}), json!({"id": 5})]),
        );
        let home = svc.home().await.unwrap();
        assert_eq!(home.services, vec![json!({"id": 1, "title": "Courses"})]);
        assert_eq!(home.fact.len(), 1);
        assert_eq!(home.testimonials, vec![json!({"id": 4}), json!({"id": 5})]);
        assert_eq!(repo.reads(), 3);
        let body = serde_json::to_value(&home).unwrap();
        for key in ["services", "fact", "testimonials"] {
            assert!(body.get(key).is_some(), "missing {key}");
        }
    }

    #[tokio::test]
    async fn home_fails_whole_when_one_listing_fails() {
        let (svc, _) = svc(
            MockContentRepository::new()
                .with_table(ContentTable::Services, vec![json!({"id": 1})])
                .failing_table(ContentTable::Testimonials),
        );
        assert!(svc.home().await.is_err());
    }

    #[tokio::test]
    async fn about_returns_all_rows() {
        let (svc, _) = svc(
            MockContentRepository::new()
                .with_table(ContentTable::About, vec![json!({"id": 1}), json!({"id": 2})]),
        );
        assert_eq!(svc.about().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn single_row_routes_take_first_row() {
        let (svc, _) = svc(
            MockContentRepository::new()
                .with_table(ContentTable::ContactInfo, vec![json!({"phone": "1"}), json!({"phone": "2"})])
                .with_table(ContentTable::Footer, vec![json!({"copyright": "2024"})]),
        );
        assert_eq!(svc.contact().await.unwrap(), Some(json!({"phone": "1"})));
        assert_eq!(svc.footer().await.unwrap(), Some(json!({"copyright": "2024"})));
    }

    #[tokio::test]
    async fn empty_results_are_none_not_errors() {
        let (svc, _) = svc(MockContentRepository::new());
        assert_eq!(svc.contact().await.unwrap(), None);
        assert_eq!(svc.footer().await.unwrap(), None);
        assert_eq!(svc.language("42").await.unwrap(), None);
        assert!(svc.service_content("42").await.unwrap().is_empty());
        assert!(svc.about().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn keyed_lookups_use_their_own_table() {
        let (svc, _) = svc(
            MockContentRepository::new()
                .with_keyed(KeyedTable::LanguageContent, "1", vec![json!({"id": 1, "name": "English"})])
                .with_keyed(
                    KeyedTable::ServicesContent,
                    "1",
                    vec![json!({"id": 1, "title": "a"}), json!({"id": 1, "title": "b"})],
                ),
        );
        assert_eq!(svc.language("1").await.unwrap(), Some(json!({"id": 1, "name": "English"})));
        assert_eq!(svc.service_content("1").await.unwrap().len(), 2);
        assert_eq!(svc.language("abc").await.unwrap(), None);
    }

    #[tokio::test]
    async fn read_errors_propagate() {
        let (svc, _) = svc(MockContentRepository::new().failing_reads());
        assert!(svc.about().await.is_err());
        assert!(svc.exams().await.is_err());
        assert!(svc.contact().await.is_err());
        assert!(svc.language("1").await.is_err());
    }

    #[tokio::test]
    async fn read_errors_carry_the_store_message() {
        let (svc, _) = svc(MockContentRepository::new().failing_table(ContentTable::Footer));
        let err = svc.footer().await.unwrap_err();
        let ServiceError::Model(models::errors::ModelError::Db(msg)) = err;
        assert!(msg.contains("\"footer\""));
    }
}
