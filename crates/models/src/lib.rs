//! Data access for the site backend: pool construction, row records and the
//! statements issued by every route.

pub mod errors;
pub mod db;
pub mod content;
pub mod exam;
pub mod client_info;

/// One result row forwarded as-is: a JSON object keyed by column name.
pub type Row = sea_orm::JsonValue;

#[cfg(test)]
mod tests;
