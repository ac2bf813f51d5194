//! Schema description loading.
//!
//! The schema file is read fresh on every invocation and treated as an opaque
//! string. It is never parsed and never cached, so edits take effect on the
//! next call.

use crate::error::{TranslateError, TranslateResult};
use std::path::Path;
use tracing::debug;

/// Read the schema description from `path`.
///
/// Fails with [`TranslateError::MissingSchema`] if the file is unreadable or
/// zero-length.
pub async fn load_schema(path: &Path) -> TranslateResult<String> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| TranslateError::missing_schema(path.display().to_string(), e.to_string()))?;

    if text.is_empty() {
        return Err(TranslateError::missing_schema(
            path.display().to_string(),
            "schema file is empty",
        ));
    }

    debug!(path = %path.display(), bytes = text.len(), "Loaded schema description");
    Ok(text)
}
