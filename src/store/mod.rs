//! Data access gateway: one parameterized statement in, rows out.

mod postgres;
#[cfg(test)]
pub(crate) mod memory;

pub use postgres::{connect, PgGateway};

use crate::error::StoreError;
use crate::sql::SqlParam;
use async_trait::async_trait;

/// A result row keyed by column name.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// Executes a single autocommitted statement. No retries, no transactions.
#[async_trait]
pub trait Gateway: Send + Sync {
    async fn execute(&self, sql: &str, params: &[SqlParam]) -> Result<Vec<Row>, StoreError>;
}
