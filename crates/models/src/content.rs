use sea_orm::{DatabaseBackend, DatabaseConnection, FromQueryResult, JsonValue, Statement};

use crate::{errors::ModelError, Row};

/// Tables read in full by the listing routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentTable {
    Services,
    Facts,
    Testimonials,
    About,
    ContactInfo,
    Footer,
}

impl ContentTable {
    pub fn table_name(self) -> &'static str {
        match self {
            ContentTable::Services => "services",
            ContentTable::Facts => "dyk",
            ContentTable::Testimonials => "testimonials",
            ContentTable::About => "about",
            ContentTable::ContactInfo => "contact_info",
            ContentTable::Footer => "footer",
        }
    }

    /// Postgres renders each row as one json value, so every column type
    /// reaches the caller.
    pub fn select_sql(self) -> &'static str {
        match self {
            ContentTable::Services => "SELECT row_to_json(t) AS row_json FROM services t",
            ContentTable::Facts => "SELECT row_to_json(t) AS row_json FROM dyk t",
            ContentTable::Testimonials => "SELECT row_to_json(t) AS row_json FROM testimonials t",
            ContentTable::About => "SELECT row_to_json(t) AS row_json FROM about t",
            ContentTable::ContactInfo => "SELECT row_to_json(t) AS row_json FROM contact_info t",
            ContentTable::Footer => "SELECT row_to_json(t) AS row_json FROM footer t",
        }
    }
}

/// Tables looked up by a caller-supplied identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyedTable {
    LanguageContent,
    ServicesContent,
}

impl KeyedTable {
    pub fn table_name(self) -> &'static str {
        match self {
            KeyedTable::LanguageContent => "language_content",
            KeyedTable::ServicesContent => "services_content",
        }
    }

    /// The id is always bound as `$1`. Comparing as text lets a non-numeric
    /// id come back as an empty set rather than a cast error.
    pub fn select_by_id_sql(self) -> &'static str {
        match self {
            KeyedTable::LanguageContent => {
                "SELECT row_to_json(t) AS row_json FROM language_content t WHERE t.id::text = $1"
            }
            KeyedTable::ServicesContent => {
                "SELECT row_to_json(t) AS row_json FROM services_content t WHERE t.id::text = $1"
            }
        }
    }
}

#[derive(Debug, FromQueryResult)]
struct RenderedRow {
    row_json: JsonValue,
}

pub fn select_all_statement(table: ContentTable) -> Statement {
    Statement::from_sql_and_values(DatabaseBackend::Postgres, table.select_sql(), [])
}

pub fn select_by_id_statement(table: KeyedTable, id: &str) -> Statement {
    Statement::from_sql_and_values(DatabaseBackend::Postgres, table.select_by_id_sql(), [id.into()])
}

async fn fetch_rendered(db: &DatabaseConnection, stmt: Statement) -> Result<Vec<Row>, ModelError> {
    let rows = RenderedRow::find_by_statement(stmt).all(db).await?;
    Ok(rows.into_iter().map(|r| r.row_json).collect())
}

/// Every row of `table`, in the order the store returns them.
pub async fn fetch_all(db: &DatabaseConnection, table: ContentTable) -> Result<Vec<Row>, ModelError> {
    fetch_rendered(db, select_all_statement(table)).await
}

/// Rows of `table` whose id matches; an unknown id yields an empty vector.
pub async fn fetch_by_id(db: &DatabaseConnection, table: KeyedTable, id: &str) -> Result<Vec<Row>, ModelError> {
    fetch_rendered(db, select_by_id_statement(table, id)).await
}
