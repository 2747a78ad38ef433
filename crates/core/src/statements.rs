//! Naive SQL statement splitting.
//!
//! Splits on every `;`. Semicolons inside string literals, dollar-quoted
//! function bodies or comments split the statement too.

/// Comment marker; fragments starting with it are dropped whole.
const COMMENT_PREFIX: &str = "--";

/// Characters shown by [`preview`] before the ellipsis.
const PREVIEW_CHARS: usize = 50;

/// Split SQL text into trimmed, non-empty, non-comment statements.
pub fn split_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty() && !s.starts_with(COMMENT_PREFIX))
        .map(str::to_string)
        .collect()
}

/// One-line preview of a statement for progress output.
///
/// `\r\n`, lone `\r` and `\n` each become a single space.
pub fn preview(statement: &str) -> String {
    let head: String = statement.chars().take(PREVIEW_CHARS).collect();
    format!("{}...", head.replace("\r\n", " ").replace(['\r', '\n'], " "))
}
