//! Whitespace normalization applied before any analysis

use serde_json::Value;

use crate::patterns::{NEWLINE_RUN, WHITESPACE_RUN};

/// Collapse newlines and whitespace runs into single spaces and trim
pub fn normalize(text: &str) -> String {
    let text = NEWLINE_RUN.replace_all(text, " ");
    let text = text.replace('\n', " ");
    let text = WHITESPACE_RUN.replace_all(&text, " ");
    text.trim_matches(is_space).to_string()
}

/// Whitespace as browsers and JSON clients see it, byte order mark included
pub(crate) fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Prompt length in UTF-16 code units, the unit clients measure prompts in
pub(crate) fn text_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Normalize an arbitrary JSON value; anything but a string becomes empty
pub fn normalize_value(value: &Value) -> String {
    match value {
        Value::String(text) => normalize(text),
        _ => String::new(),
    }
}
