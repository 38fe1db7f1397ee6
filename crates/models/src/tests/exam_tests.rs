use std::collections::BTreeMap;

use crate::exam::{self, ExamListing, EXAMS_SQL};
use sea_orm::{DatabaseBackend, MockDatabase, Transaction, Value};

fn listing_row(lang: &str, desc: &str, exam: &str) -> BTreeMap<&'static str, Value> {
    BTreeMap::from([
        ("language_name", Value::from(lang)),
        ("language_description", Value::from(desc)),
        ("exam_name", Value::from(exam)),
    ])
}

#[tokio::test]
async fn fetch_exams_maps_join_columns() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            listing_row("German", "Goethe levels", "Goethe-Zertifikat B1"),
            listing_row("French", "DELF/DALF", "DELF A2"),
        ]])
        .into_connection();

    let exams = exam::fetch_exams(&db).await.unwrap();
    assert_eq!(exams.len(), 2);
    assert_eq!(
        exams[0],
        ExamListing {
            language_name: Some("German".into()),
            language_description: Some("Goethe levels".into()),
            exam_name: Some("Goethe-Zertifikat B1".into()),
        }
    );
    assert_eq!(exams[1].exam_name.as_deref(), Some("DELF A2"));

    assert_eq!(
        db.into_transaction_log(),
        vec![Transaction::from_sql_and_values(DatabaseBackend::Postgres, EXAMS_SQL, [])]
    );
}

#[test]
fn exams_sql_is_inner_join_on_id() {
    assert!(EXAMS_SQL.contains("INNER JOIN language_exams ON language_info.id = language_exams.id"));
}

#[test]
fn listing_serializes_with_column_names() {
    let listing = ExamListing {
        language_name: Some("Spanish".into()),
        language_description: None,
        exam_name: Some("DELE".into()),
    };
    let v = serde_json::to_value(&listing).unwrap();
    assert_eq!(
        v,
        serde_json::json!({"language_name": "Spanish", "language_description": null, "exam_name": "DELE"})
    );
}
