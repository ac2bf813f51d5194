//! The natural-language-to-SQL translation pipeline.
//!
//! One linear flow per call: validate the query string, read the schema file,
//! build the prompt, ask the completion service for SQL, normalize the answer,
//! and hand it to the raw-SQL executor. Failures before execution propagate to
//! the caller; execution failures are logged and swallowed, so the call
//! resolves with no result instead of an error.

use crate::config::TranslatorOptions;
use crate::db::RawSqlExecutor;
use crate::error::{TranslateError, TranslateResult};
use crate::llm::{ChatRequest, CompletionService, build_prompt, collapse_line_breaks};
use crate::models::QueryResult;
use crate::schema::load_schema;
use std::sync::Arc;
use tracing::{error, info};

/// Translates natural-language questions into SQL and runs them.
///
/// Holds a completion service, a raw-SQL executor, and read-only options.
/// Calls are independent; concurrent use is safe insofar as the injected
/// collaborators are.
pub struct Translator {
    completion: Arc<dyn CompletionService>,
    executor: Arc<dyn RawSqlExecutor>,
    options: TranslatorOptions,
}

impl Translator {
    /// Create a translator with default options.
    pub fn new(completion: Arc<dyn CompletionService>, executor: Arc<dyn RawSqlExecutor>) -> Self {
        Self::with_options(completion, executor, TranslatorOptions::default())
    }

    /// Create a translator with explicit options.
    pub fn with_options(
        completion: Arc<dyn CompletionService>,
        executor: Arc<dyn RawSqlExecutor>,
        options: TranslatorOptions,
    ) -> Self {
        Self {
            completion,
            executor,
            options,
        }
    }

    /// The configured options.
    pub fn options(&self) -> &TranslatorOptions {
        &self.options
    }

    /// Translate `query` into SQL and execute it against the live connection.
    ///
    /// Returns `Ok(Some(rows))` on success and `Ok(None)` when the generated
    /// statement failed to execute (the failure is logged, not surfaced).
    /// Everything before execution fails with the corresponding
    /// [`TranslateError`] variant.
    pub async fn translate(&self, query: &str) -> TranslateResult<Option<QueryResult>> {
        if query.is_empty() {
            return Err(TranslateError::invalid_input("No query string provided"));
        }

        let schema = load_schema(self.options.schema_path_or_default()).await?;

        let dialect = self.options.dialect_or_default();
        let model = self.options.model_or_default();
        let prompt = build_prompt(&schema, dialect, query);

        let request = ChatRequest::system_prompt(model, prompt);
        let response = self.completion.complete(request).await?;

        if response.choices.is_empty() {
            return Err(TranslateError::upstream(
                "Completion response contained no choices",
            ));
        }

        let content = response
            .first_content()
            .ok_or_else(|| TranslateError::empty_completion(model))?;

        let sql = collapse_line_breaks(content);
        info!(sql = %sql, model = %model, "Translated query");

        match self.executor.execute_raw(&sql).await {
            Ok(result) => Ok(Some(result)),
            Err(e) => {
                error!(error = %e, sql = %sql, "Generated SQL failed to execute");
                Ok(None)
            }
        }
    }
}
