//! Connection pool management.
//!
//! This module provides connection handling using database-specific pools
//! (MySqlPool, PgPool, SqlitePool) to ensure full type support. One pool per
//! translator; the pool is the live connection the generated SQL runs against.

use crate::error::{TranslateError, TranslateResult};
use sqlx::{
    MySqlPool, PgPool, SqlitePool, mysql::MySqlPoolOptions, postgres::PgPoolOptions,
    sqlite::SqlitePoolOptions,
};
use tracing::info;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_MAX_CONNECTIONS_SQLITE: u32 = 1;

/// Database backend type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseType {
    /// Includes MariaDB
    MySql,
    Postgres,
    SQLite,
}

impl DatabaseType {
    /// Parse database type from a connection string.
    pub fn from_connection_string(connection_string: &str) -> Option<Self> {
        let lower = connection_string.to_lowercase();
        if lower.starts_with("postgres://") || lower.starts_with("postgresql://") {
            Some(Self::Postgres)
        } else if lower.starts_with("mysql://") || lower.starts_with("mariadb://") {
            Some(Self::MySql)
        } else if lower.starts_with("sqlite://") || lower.starts_with("sqlite:") {
            Some(Self::SQLite)
        } else {
            None
        }
    }

    /// Get the display name for this database type.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::MySql => "MySQL",
            Self::Postgres => "PostgreSQL",
            Self::SQLite => "SQLite",
        }
    }
}

impl std::fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Database-specific connection pool (avoids AnyPool limitations).
#[derive(Debug, Clone)]
pub enum DbPool {
    MySql(MySqlPool),
    Postgres(PgPool),
    SQLite(SqlitePool),
}

impl DbPool {
    /// Connect to the database named by `connection_string`.
    ///
    /// The backend is chosen from the URL scheme. SQLite uses a single
    /// connection so in-memory databases behave predictably.
    pub async fn connect(connection_string: &str) -> TranslateResult<Self> {
        let db_type =
            DatabaseType::from_connection_string(connection_string).ok_or_else(|| {
                TranslateError::configuration(format!(
                    "Unrecognized database URL scheme in '{}'",
                    connection_string
                ))
            })?;

        info!(db_type = %db_type, "Connecting to database");

        let pool = match db_type {
            DatabaseType::MySql => {
                let pool = MySqlPoolOptions::new()
                    .max_connections(DEFAULT_MAX_CONNECTIONS)
                    .connect(connection_string)
                    .await?;
                DbPool::MySql(pool)
            }
            DatabaseType::Postgres => {
                let pool = PgPoolOptions::new()
                    .max_connections(DEFAULT_MAX_CONNECTIONS)
                    .connect(connection_string)
                    .await?;
                DbPool::Postgres(pool)
            }
            DatabaseType::SQLite => {
                let pool = SqlitePoolOptions::new()
                    .max_connections(DEFAULT_MAX_CONNECTIONS_SQLITE)
                    .connect(connection_string)
                    .await?;
                DbPool::SQLite(pool)
            }
        };

        Ok(pool)
    }

    /// Close the connection pool.
    pub async fn close(&self) {
        match self {
            DbPool::MySql(pool) => pool.close().await,
            DbPool::Postgres(pool) => pool.close().await,
            DbPool::SQLite(pool) => pool.close().await,
        }
    }

    /// Get the database type for this pool.
    pub fn db_type(&self) -> DatabaseType {
        match self {
            DbPool::MySql(_) => DatabaseType::MySql,
            DbPool::Postgres(_) => DatabaseType::Postgres,
            DbPool::SQLite(_) => DatabaseType::SQLite,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_type_from_connection_string() {
        assert_eq!(
            DatabaseType::from_connection_string("postgres://user@localhost/db"),
            Some(DatabaseType::Postgres)
        );
        assert_eq!(
            DatabaseType::from_connection_string("postgresql://user@localhost/db"),
            Some(DatabaseType::Postgres)
        );
        assert_eq!(
            DatabaseType::from_connection_string("mysql://user@localhost/db"),
            Some(DatabaseType::MySql)
        );
        assert_eq!(
            DatabaseType::from_connection_string("mariadb://user@localhost/db"),
            Some(DatabaseType::MySql)
        );
        assert_eq!(
            DatabaseType::from_connection_string("sqlite:data.db"),
            Some(DatabaseType::SQLite)
        );
        assert_eq!(
            DatabaseType::from_connection_string("sqlite::memory:"),
            Some(DatabaseType::SQLite)
        );
        assert_eq!(DatabaseType::from_connection_string("redis://host"), None);
    }

    #[test]
    fn test_database_type_display() {
        assert_eq!(DatabaseType::MySql.to_string(), "MySQL");
        assert_eq!(DatabaseType::Postgres.to_string(), "PostgreSQL");
        assert_eq!(DatabaseType::SQLite.to_string(), "SQLite");
    }

    #[tokio::test]
    async fn test_connect_rejects_unknown_scheme() {
        let err = DbPool::connect("redis://localhost").await.unwrap_err();
        assert!(matches!(
            err,
            crate::error::TranslateError::Configuration { .. }
        ));
    }

    #[tokio::test]
    async fn test_connect_sqlite_memory() {
        let pool = DbPool::connect("sqlite::memory:").await.unwrap();
        assert_eq!(pool.db_type(), DatabaseType::SQLite);
        pool.close().await;
    }
}
