//! Natural-language-to-SQL translation over a live database connection.
//!
//! Given a free-text question, this library asks an LLM chat-completion
//! endpoint to produce a raw SQL statement (informed by the current schema
//! description file), then executes that statement against the configured
//! database and returns the result rows.
//!
//! ```no_run
//! use nl2sql::{DbPool, OpenAiClient, PoolExecutor, Translator, TranslatorOptions};
//! use std::sync::Arc;
//!
//! # async fn run() -> nl2sql::TranslateResult<()> {
//! let completion = Arc::new(OpenAiClient::from_env()?);
//! let pool = DbPool::connect("sqlite:data.db").await?;
//! let executor = Arc::new(PoolExecutor::new(pool));
//!
//! let translator = Translator::with_options(
//!     completion,
//!     executor,
//!     TranslatorOptions::new().with_db("sqlite"),
//! );
//!
//! if let Some(rows) = translator.translate("how many users signed up today?").await? {
//!     println!("{} rows", rows.row_count());
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod llm;
pub mod models;
pub mod schema;
pub mod translator;

pub use config::{DEFAULT_DIALECT, DEFAULT_MODEL, DEFAULT_SCHEMA_PATH, TranslatorOptions};
pub use db::{DatabaseType, DbPool, PoolExecutor, RawSqlExecutor};
pub use error::{TranslateError, TranslateResult};
pub use llm::{ChatRequest, ChatResponse, CompletionService, OpenAiClient};
pub use models::{ColumnMetadata, QueryResult};
pub use translator::Translator;
