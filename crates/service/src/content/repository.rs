use async_trait::async_trait;
use models::{
    client_info::ClientSubmission,
    content::{ContentTable, KeyedTable},
    exam::ExamListing,
    Row,
};

use crate::errors::ServiceError;

/// Repository abstraction over the `content` tables and `client_info`.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn list(&self, table: ContentTable) -> Result<Vec<Row>, ServiceError>;
    async fn list_by_id(&self, table: KeyedTable, id: &str) -> Result<Vec<Row>, ServiceError>;
    async fn list_exams(&self) -> Result<Vec<ExamListing>, ServiceError>;
    async fn insert_client_info(&self, form: &ClientSubmission) -> Result<(), ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::{HashMap, HashSet};
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex, MutexGuard};
    use models::errors::ModelError;
    use tokio::sync::Barrier;

    fn store_error(msg: impl Into<String>) -> ServiceError {
        ServiceError::Model(ModelError::Db(msg.into()))
    }

    fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
        m.lock().unwrap_or_else(|e| e.into_inner())
    }

    #[derive(Default)]
    pub struct MockContentRepository {
        tables: Mutex<HashMap<ContentTable, Vec<Row>>>,
        keyed: Mutex<HashMap<(KeyedTable, String), Vec<Row>>>, // key: (table, id)
        exams: Mutex<Vec<ExamListing>>,
        inserted: Mutex<Vec<ClientSubmission>>,
        failing_tables: Mutex<HashSet<ContentTable>>,
        fail_reads: AtomicBool,
        fail_inserts: AtomicBool,
        reads: AtomicUsize,
        barrier: Mutex<Option<Arc<Barrier>>>,
    }

    impl MockContentRepository {
        pub fn new() -> Self { Self::default() }

        pub fn with_table(self, table: ContentTable, rows: Vec<Row>) -> Self {
            lock(&self.tables).insert(table, rows);
            self
        }

        pub fn with_keyed(self, table: KeyedTable, id: &str, rows: Vec<Row>) -> Self {
            lock(&self.keyed).insert((table, id.to_string()), rows);
            self
        }

        pub fn with_exams(self, exams: Vec<ExamListing>) -> Self {
            *lock(&self.exams) = exams;
            self
        }

        /// Every read fails with a database error.
        pub fn failing_reads(self) -> Self {
            self.fail_reads.store(true, Ordering::SeqCst);
            self
        }

        /// Only reads of `table` fail.
        pub fn failing_table(self, table: ContentTable) -> Self {
            lock(&self.failing_tables).insert(table);
            self
        }

        pub fn failing_inserts(self) -> Self {
            self.fail_inserts.store(true, Ordering::SeqCst);
            self
        }

        /// Each read waits on `barrier` before answering.
        pub fn with_barrier(self, barrier: Arc<Barrier>) -> Self {
            *lock(&self.barrier) = Some(barrier);
            self
        }

        pub fn inserted(&self) -> Vec<ClientSubmission> { lock(&self.inserted).clone() }

        pub fn reads(&self) -> usize { self.reads.load(Ordering::SeqCst) }

        async fn read_gate(&self, table: Option<ContentTable>) -> Result<(), ServiceError> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            let barrier = lock(&self.barrier).clone();
            if let Some(b) = barrier {
                b.wait().await;
            }
            if self.fail_reads.load(Ordering::SeqCst) {
                return Err(store_error("connection refused"));
            }
            if let Some(t) = table {
                if lock(&self.failing_tables).contains(&t) {
                    return Err(store_error(format!("relation \"{}\" does not exist", t.table_name())));
                }
            }
            Ok(())
        }
    }

    #[async_trait]
    impl ContentRepository for MockContentRepository {
        async fn list(&self, table: ContentTable) -> Result<Vec<Row>, ServiceError> {
            self.read_gate(Some(table)).await?;
            Ok(lock(&self.tables).get(&table).cloned().unwrap_or_default())
        }

        async fn list_by_id(&self, table: KeyedTable, id: &str) -> Result<Vec<Row>, ServiceError> {
            self.read_gate(None).await?;
            Ok(lock(&self.keyed).get(&(table, id.to_string())).cloned().unwrap_or_default())
        }

        async fn list_exams(&self) -> Result<Vec<ExamListing>, ServiceError> {
            self.read_gate(None).await?;
            Ok(lock(&self.exams).clone())
        }

        async fn insert_client_info(&self, form: &ClientSubmission) -> Result<(), ServiceError> {
            if self.fail_inserts.load(Ordering::SeqCst) {
                return Err(store_error("null value in column \"name\" violates not-null constraint"));
            }
            lock(&self.inserted).push(form.clone());
            Ok(())
        }
    }
}
