//! Compiled regular expressions shared by the analysis modules

use once_cell::sync::Lazy;
use regex::Regex;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern must compile")
}

/// Vague words that weaken a prompt. Word boundaries are ASCII-only, so a
/// neighbouring accented letter does not hide the word.
pub(crate) static VAGUE_TERMS: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)(?-u:\b)(thing|stuff|good|bad|nice)(?-u:\b)"));

pub(crate) static ROLE: Lazy<Regex> = Lazy::new(|| compile(r"(?i)act as|you are|as a"));

pub(crate) static CONSTRAINTS: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)format|only|must|should|don't|do not"));

/// Substring match, so "likely" also counts
pub(crate) static EXAMPLES: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)example|such as|like|e\.g\."));

/// Numbered or bulleted line starts
pub(crate) static LIST_MARKER: Lazy<Regex> = Lazy::new(|| compile(r"(?m)^\d+\.|^-|^\*"));

pub(crate) static NEWLINE_RUN: Lazy<Regex> = Lazy::new(|| compile(r"\n{2,}"));

/// Whitespace runs, counting the byte order mark as whitespace
pub(crate) static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| compile(r"[\s\x{FEFF}]+"));
