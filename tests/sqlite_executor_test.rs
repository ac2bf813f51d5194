//! Tests for the sqlx-backed raw-SQL executor against a real SQLite database.

use async_trait::async_trait;
use nl2sql::error::{TranslateError, TranslateResult};
use nl2sql::llm::{ChatChoice, ChatRequest, ChatResponse, ChoiceMessage, CompletionService};
use nl2sql::{DbPool, PoolExecutor, RawSqlExecutor, Translator, TranslatorOptions};
use serde_json::Value as JsonValue;
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

async fn seeded_pool() -> DbPool {
    let pool = DbPool::connect("sqlite::memory:").await.unwrap();

    let DbPool::SQLite(sqlite) = &pool else {
        panic!("Expected SQLite pool");
    };
    sqlx::query("CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT, score REAL, avatar BLOB)")
        .execute(sqlite)
        .await
        .unwrap();
    sqlx::query("INSERT INTO users (id, name, score, avatar) VALUES (1, 'ada', 9.5, x'616263')")
        .execute(sqlite)
        .await
        .unwrap();
    sqlx::query("INSERT INTO users (id, name, score, avatar) VALUES (2, 'grace', 8.0, NULL)")
        .execute(sqlite)
        .await
        .unwrap();

    pool
}

#[tokio::test]
async fn test_execute_raw_returns_rows() {
    let executor = PoolExecutor::new(seeded_pool().await);

    let result = executor
        .execute_raw("SELECT id, name FROM users ORDER BY id")
        .await
        .unwrap();

    assert_eq!(result.row_count(), 2);
    assert_eq!(result.columns[0].name, "id");
    assert_eq!(result.columns[1].name, "name");
    assert_eq!(result.rows[0]["id"], JsonValue::from(1));
    assert_eq!(result.rows[0]["name"], JsonValue::from("ada"));
    assert_eq!(result.rows[1]["name"], JsonValue::from("grace"));
}

#[tokio::test]
async fn test_execute_raw_decodes_types() {
    let executor = PoolExecutor::new(seeded_pool().await);

    let result = executor
        .execute_raw("SELECT score, avatar FROM users ORDER BY id")
        .await
        .unwrap();

    assert_eq!(result.rows[0]["score"], JsonValue::from(9.5));
    // BLOB columns come back base64-encoded
    assert_eq!(result.rows[0]["avatar"], JsonValue::from("YWJj"));
    assert_eq!(result.rows[1]["avatar"], JsonValue::Null);
}

#[tokio::test]
async fn test_execute_raw_decimal_declared_column() {
    let pool = DbPool::connect("sqlite::memory:").await.unwrap();
    let DbPool::SQLite(sqlite) = &pool else {
        panic!("Expected SQLite pool");
    };
    sqlx::query("CREATE TABLE orders (id INTEGER PRIMARY KEY, price DECIMAL(10,2))")
        .execute(sqlite)
        .await
        .unwrap();
    sqlx::query("INSERT INTO orders (id, price) VALUES (1, 19.99)")
        .execute(sqlite)
        .await
        .unwrap();

    let executor = PoolExecutor::new(pool);
    let result = executor
        .execute_raw("SELECT price FROM orders")
        .await
        .unwrap();

    // Declared-decimal columns must come back as values, never null
    assert_eq!(result.rows[0]["price"], JsonValue::from(19.99));
}

#[tokio::test]
async fn test_execute_raw_empty_result() {
    let executor = PoolExecutor::new(seeded_pool().await);

    let result = executor
        .execute_raw("SELECT * FROM users WHERE id > 100")
        .await
        .unwrap();

    assert!(result.is_empty());
    assert!(result.columns.is_empty());
}

#[tokio::test]
async fn test_execute_raw_invalid_sql_is_execution_error() {
    let executor = PoolExecutor::new(seeded_pool().await);

    let err = executor
        .execute_raw("SELECT * FROM missing_table")
        .await
        .unwrap_err();

    assert!(matches!(err, TranslateError::Execution { .. }));
}

/// Completion service returning a fixed statement, for wiring the real
/// executor into the full pipeline.
struct CannedCompletion(String);

#[async_trait]
impl CompletionService for CannedCompletion {
    async fn complete(&self, _request: ChatRequest) -> TranslateResult<ChatResponse> {
        Ok(ChatResponse {
            choices: vec![ChatChoice {
                message: Some(ChoiceMessage {
                    content: Some(self.0.clone()),
                }),
            }],
        })
    }
}

#[tokio::test]
async fn test_pipeline_with_live_sqlite() {
    let mut schema = NamedTempFile::new().unwrap();
    write!(
        schema,
        "CREATE TABLE users (\n  id INTEGER PRIMARY KEY,\n  name TEXT\n);"
    )
    .unwrap();

    let completion = Arc::new(CannedCompletion(
        "SELECT name FROM\nusers ORDER BY id;".to_string(),
    ));
    let executor = Arc::new(PoolExecutor::new(seeded_pool().await));
    let translator = Translator::with_options(
        completion,
        executor,
        TranslatorOptions::new().with_schema_path(schema.path()),
    );

    let result = translator
        .translate("what are the names of all users?")
        .await
        .unwrap()
        .expect("execution should succeed");

    assert_eq!(result.row_count(), 2);
    assert_eq!(result.rows[0]["name"], JsonValue::from("ada"));
    assert_eq!(result.rows[1]["name"], JsonValue::from("grace"));
}

#[tokio::test]
async fn test_pipeline_swallows_bad_generated_sql() {
    let mut schema = NamedTempFile::new().unwrap();
    write!(schema, "CREATE TABLE users (id INTEGER);").unwrap();

    let completion = Arc::new(CannedCompletion("SELECT * FROM nonexistent;".to_string()));
    let executor = Arc::new(PoolExecutor::new(seeded_pool().await));
    let translator = Translator::with_options(
        completion,
        executor,
        TranslatorOptions::new().with_schema_path(schema.path()),
    );

    let result = translator.translate("list the widgets").await.unwrap();
    assert!(result.is_none());
}
