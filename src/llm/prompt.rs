//! Prompt construction and line-break normalization.
//!
//! The prompt is a fixed instruction template: raw SQL only, always SELECT,
//! the schema as opaque context, the target dialect name, and the user's
//! question verbatim. The schema has its line breaks removed so the embedded
//! text stays a single predictable line; completions have line-break runs
//! collapsed to single spaces in case the model wraps the statement.

/// Remove every carriage return and line feed from `text`.
///
/// Used on the schema description before embedding it in the prompt.
pub fn strip_line_breaks(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '\r' | '\n')).collect()
}

/// Replace each run of carriage returns and line feeds with a single space.
///
/// Used on the completion text before handing it to the executor.
pub fn collapse_line_breaks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_break = false;
    for c in text.chars() {
        if matches!(c, '\r' | '\n') {
            if !in_break {
                out.push(' ');
                in_break = true;
            }
        } else {
            out.push(c);
            in_break = false;
        }
    }
    out
}

/// Build the instruction prompt for one translation call.
///
/// `schema` is embedded after line-break stripping; `query` is embedded
/// verbatim.
pub fn build_prompt(schema: &str, dialect: &str, query: &str) -> String {
    format!(
        "You are an AI assistant that returns raw sql queries using natural language. \
         You only output raw SQL queries. Never return anything other than raw SQL. \
         Always begin the query with SELECT. You will be given the following schema: \
         {schema} \
         Take the below query and return raw SQL({dialect}): \
         {query}",
        schema = strip_line_breaks(schema),
        dialect = dialect,
        query = query,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_line_breaks() {
        assert_eq!(strip_line_breaks("a\nb\r\nc"), "abc");
        assert_eq!(strip_line_breaks("no breaks"), "no breaks");
        assert_eq!(strip_line_breaks(""), "");
    }

    #[test]
    fn test_collapse_line_breaks_single() {
        assert_eq!(
            collapse_line_breaks("SELECT * FROM\nusers;"),
            "SELECT * FROM users;"
        );
    }

    #[test]
    fn test_collapse_line_breaks_runs() {
        assert_eq!(collapse_line_breaks("a\r\n\r\nb"), "a b");
        assert_eq!(collapse_line_breaks("a\n\n\nb\nc"), "a b c");
    }

    #[test]
    fn test_collapse_line_breaks_no_breaks() {
        assert_eq!(collapse_line_breaks("SELECT 1;"), "SELECT 1;");
    }

    #[test]
    fn test_build_prompt_embeds_parts() {
        let prompt = build_prompt(
            "CREATE TABLE users (\n  id INTEGER,\n  name TEXT\n);",
            "postgres",
            "how many users are there?",
        );
        assert!(prompt.contains("CREATE TABLE users (  id INTEGER,  name TEXT);"));
        assert!(prompt.contains("raw SQL(postgres)"));
        assert!(prompt.contains("how many users are there?"));
        assert!(prompt.contains("Always begin the query with SELECT"));
    }

    #[test]
    fn test_build_prompt_schema_has_no_line_breaks() {
        let prompt = build_prompt("a\nb\r\nc", "sqlite", "q");
        // The template itself is single-line, so the whole prompt must be too.
        assert!(!prompt.contains('\n'));
        assert!(!prompt.contains('\r'));
    }
}
