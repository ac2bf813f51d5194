//! Configuration for the translator.
//!
//! All options are optional overrides with fixed defaults, matching the
//! extension-argument shape of the original integration: a target SQL dialect
//! name for the prompt, a completion-model identifier, and the schema file
//! path. Constructed once, read-only thereafter.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// SQL dialect named in the prompt when none is configured.
pub const DEFAULT_DIALECT: &str = "sqlite";

/// Completion model used when none is configured.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Relative path the schema description is read from on every call.
pub const DEFAULT_SCHEMA_PATH: &str = "db/schema.sql";

/// Base URL of the completion endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://api.openai.com/v1";

/// Environment variable holding the completion API credential.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Optional overrides for a [`Translator`](crate::Translator).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslatorOptions {
    /// Target SQL dialect name embedded in the prompt (default: "sqlite").
    pub db: Option<String>,
    /// Completion-model identifier (default: "gpt-3.5-turbo").
    pub model: Option<String>,
    /// Path to the schema description file (default: "db/schema.sql").
    pub schema_path: Option<PathBuf>,
}

impl TranslatorOptions {
    /// Create options with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target SQL dialect name.
    pub fn with_db(mut self, db: impl Into<String>) -> Self {
        self.db = Some(db.into());
        self
    }

    /// Set the completion-model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the schema file path.
    pub fn with_schema_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.schema_path = Some(path.into());
        self
    }

    /// Get the dialect name with default value.
    pub fn dialect_or_default(&self) -> &str {
        self.db.as_deref().unwrap_or(DEFAULT_DIALECT)
    }

    /// Get the model identifier with default value.
    pub fn model_or_default(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    /// Get the schema path with default value.
    pub fn schema_path_or_default(&self) -> &Path {
        self.schema_path
            .as_deref()
            .unwrap_or(Path::new(DEFAULT_SCHEMA_PATH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_defaults() {
        let opts = TranslatorOptions::new();
        assert_eq!(opts.dialect_or_default(), "sqlite");
        assert_eq!(opts.model_or_default(), "gpt-3.5-turbo");
        assert_eq!(opts.schema_path_or_default(), Path::new("db/schema.sql"));
    }

    #[test]
    fn test_options_overrides() {
        let opts = TranslatorOptions::new()
            .with_db("postgres")
            .with_model("gpt-4o-mini")
            .with_schema_path("prisma/schema.prisma");
        assert_eq!(opts.dialect_or_default(), "postgres");
        assert_eq!(opts.model_or_default(), "gpt-4o-mini");
        assert_eq!(
            opts.schema_path_or_default(),
            Path::new("prisma/schema.prisma")
        );
    }

    #[test]
    fn test_options_roundtrip_json() {
        let opts = TranslatorOptions::new().with_db("mysql");
        let json = serde_json::to_string(&opts).unwrap();
        let back: TranslatorOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back.dialect_or_default(), "mysql");
        assert_eq!(back.model_or_default(), "gpt-3.5-turbo");
    }
}
