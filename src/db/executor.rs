//! Raw SQL execution.
//!
//! [`RawSqlExecutor`] is the capability type for "things that can run an
//! arbitrary SQL string against a live connection and return rows". The
//! translator only ever sees this trait; [`PoolExecutor`] is the sqlx-backed
//! implementation over [`DbPool`].
//!
//! The statement is executed verbatim and unprepared. There is no validation,
//! parameterization, or sandboxing of the model-generated SQL — that is an
//! accepted property of this design.

use crate::db::pool::DbPool;
use crate::db::types::RowToJson;
use crate::error::TranslateResult;
use crate::models::QueryResult;
use async_trait::async_trait;
use sqlx::Executor;
use std::time::Instant;
use tracing::debug;

/// A capability that executes a raw SQL string and returns rows.
#[async_trait]
pub trait RawSqlExecutor: Send + Sync {
    /// Execute `sql` against the live connection.
    async fn execute_raw(&self, sql: &str) -> TranslateResult<QueryResult>;
}

/// Executor backed by a database-specific connection pool.
pub struct PoolExecutor {
    pool: DbPool,
}

impl PoolExecutor {
    /// Create an executor over an established pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Access the underlying pool.
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl RawSqlExecutor for PoolExecutor {
    async fn execute_raw(&self, sql: &str) -> TranslateResult<QueryResult> {
        let start = Instant::now();

        debug!(sql = %sql, db_type = %self.pool.db_type(), "Executing raw SQL");

        let result = match &self.pool {
            // fetch_all on the pool runs the text unprepared, so statements
            // the drivers refuse to prepare still execute
            DbPool::MySql(pool) => {
                let rows = pool.fetch_all(sql).await?;
                process_rows(rows, start)
            }
            DbPool::Postgres(pool) => {
                let rows = pool.fetch_all(sql).await?;
                process_rows(rows, start)
            }
            DbPool::SQLite(pool) => {
                let rows = pool.fetch_all(sql).await?;
                process_rows(rows, start)
            }
        };

        Ok(result)
    }
}

/// Convert rows from any database type into a QueryResult.
fn process_rows<R: RowToJson>(rows: Vec<R>, start: Instant) -> QueryResult {
    let execution_time_ms = start.elapsed().as_millis() as u64;

    if rows.is_empty() {
        return QueryResult::empty(execution_time_ms);
    }

    let columns = rows[0].get_column_metadata();
    let json_rows = rows.iter().map(|r| r.to_json_map()).collect();

    QueryResult {
        columns,
        rows: json_rows,
        execution_time_ms,
    }
}
