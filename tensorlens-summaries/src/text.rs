//! Summary text normalization
//!
//! Raw evaluation results come back the way the host prints them:
//! whitespace-padded, wrapped in one layer of quotes, with newlines
//! escaped as `\n`. Normalization undoes exactly that so multi-line
//! descriptions render as real lines in the debugger UI.

/// Normalize raw summary text for display.
///
/// Trims surrounding whitespace, strips a single layer of enclosing
/// quotes, and converts escaped newline sequences to literal newlines,
/// in that order. Unconditional: an empty or whitespace-only input
/// normalizes to the empty string.
pub fn normalize_summary(raw: &str) -> String {
    strip_quotes(raw.trim()).replace("\\n", "\n")
}

/// Strip one matching pair of enclosing quote characters, if present.
/// A lone quote or mismatched pair is left alone.
fn strip_quotes(text: &str) -> &str {
    let bytes = text.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &text[1..text.len() - 1];
        }
    }
    text
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
