//! Error types for the natural-language-to-SQL translator.
//!
//! This module defines all error types using `thiserror` for ergonomic error
//! handling. Each variant maps to one failure point in the translation
//! pipeline, so callers can tell a bad input apart from a broken upstream.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Schema unavailable at '{path}': {message}")]
    MissingSchema { path: String, message: String },

    #[error("Completion service error: {message}")]
    Upstream { message: String },

    #[error("Completion from model '{model}' contained no SQL text")]
    EmptyCompletion { model: String },

    #[error("Execution failed: {message}")]
    Execution {
        message: String,
        /// e.g., "42P01" for undefined table
        sql_state: Option<String>,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl TranslateError {
    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a missing schema error.
    pub fn missing_schema(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MissingSchema {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an upstream (completion service) error.
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    /// Create an empty completion error.
    pub fn empty_completion(model: impl Into<String>) -> Self {
        Self::EmptyCompletion {
            model: model.into(),
        }
    }

    /// Create an execution error with optional SQL state.
    pub fn execution(message: impl Into<String>, sql_state: Option<String>) -> Self {
        Self::Execution {
            message: message.into(),
            sql_state,
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// True for execution failures, which the translator swallows rather
    /// than surfacing to the caller.
    pub fn is_execution(&self) -> bool {
        matches!(self, Self::Execution { .. })
    }
}

/// Convert sqlx errors to TranslateError.
impl From<sqlx::Error> for TranslateError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                let code = db_err.code().map(|c| c.to_string());
                TranslateError::execution(db_err.message(), code)
            }
            sqlx::Error::Configuration(msg) => TranslateError::configuration(msg.to_string()),
            sqlx::Error::PoolTimedOut => {
                TranslateError::execution("Connection pool acquire timed out", None)
            }
            sqlx::Error::PoolClosed => TranslateError::execution("Connection pool is closed", None),
            sqlx::Error::Io(io_err) => {
                TranslateError::execution(format!("I/O error: {}", io_err), None)
            }
            sqlx::Error::Tls(tls_err) => {
                TranslateError::execution(format!("TLS error: {}", tls_err), None)
            }
            sqlx::Error::Protocol(msg) => {
                TranslateError::execution(format!("Protocol error: {}", msg), None)
            }
            sqlx::Error::ColumnDecode { index, source } => TranslateError::execution(
                format!("Failed to decode column {}: {}", index, source),
                None,
            ),
            sqlx::Error::Decode(source) => {
                TranslateError::execution(format!("Decode error: {}", source), None)
            }
            _ => TranslateError::execution(format!("Database error: {}", err), None),
        }
    }
}

/// Convert reqwest errors to TranslateError.
impl From<reqwest::Error> for TranslateError {
    fn from(err: reqwest::Error) -> Self {
        TranslateError::upstream(err.to_string())
    }
}

/// Result type alias for translator operations.
pub type TranslateResult<T> = Result<T, TranslateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TranslateError::invalid_input("No query string provided");
        assert!(err.to_string().contains("Invalid input"));

        let err = TranslateError::missing_schema("db/schema.sql", "file not found");
        assert!(err.to_string().contains("db/schema.sql"));
    }

    #[test]
    fn test_empty_completion_names_model() {
        let err = TranslateError::empty_completion("gpt-3.5-turbo");
        assert!(err.to_string().contains("gpt-3.5-turbo"));
    }

    #[test]
    fn test_is_execution() {
        assert!(TranslateError::execution("syntax error", None).is_execution());
        assert!(!TranslateError::upstream("502").is_execution());
        assert!(!TranslateError::invalid_input("empty").is_execution());
    }

    #[test]
    fn test_from_sqlx_pool_closed() {
        let err: TranslateError = sqlx::Error::PoolClosed.into();
        assert!(err.is_execution());
    }

    #[test]
    fn test_execution_carries_sql_state() {
        let err = TranslateError::execution("undefined table", Some("42P01".to_string()));
        match err {
            TranslateError::Execution { sql_state, .. } => {
                assert_eq!(sql_state.as_deref(), Some("42P01"));
            }
            _ => panic!("expected Execution variant"),
        }
    }
}
