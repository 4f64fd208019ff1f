//! Compiled patterns shared by the string, account and PEM validators.

use regex::Regex;
use std::sync::LazyLock;

/// Batch strings: alphanumerics plus path/identifier punctuation. Empty matches.
pub(crate) static STRING_ALLOW_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Compile-time constant pattern.
    #[allow(clippy::expect_used)]
    Regex::new(r"^[A-Za-z0-9_./-]*$").expect("valid regex")
});

/// Username shape: leading letter, then alphanumerics, `.`, `_` or `-`.
pub(crate) static USERNAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[A-Za-z][A-Za-z0-9._-]*$").expect("valid regex")
});

/// Quote, backtick, tag and statement-terminator characters.
pub(crate) static FORBIDDEN_CHAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r#"["'`<>;]"#).expect("valid regex")
});

/// SQL keyword standing alone as a whitespace-delimited word.
pub(crate) static SQL_KEYWORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"(?i)(?:^|\s)(?:select|union|insert|update|delete|drop|from|where|exec)(?:\s|$)")
        .expect("valid regex")
});

/// One armored block. Labels are compared by the caller since the regex
/// crate has no backreferences.
pub(crate) static PEM_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"(?s)-{4,}BEGIN ([A-Z0-9 ]+?)-{4,}(.*?)-{4,}END ([A-Z0-9 ]+?)-{4,}")
        .expect("valid regex")
});

pub(crate) static PEM_BEGIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"-{4,}BEGIN ").expect("valid regex")
});

/// Raw base64: one contiguous run with up to two padding characters.
pub(crate) static RAW_BASE64_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[A-Za-z0-9+/]+={0,2}$").expect("valid regex")
});

/// True if `input` carries a quote, backtick, tag or terminator character.
pub(crate) fn contains_forbidden_char(input: &str) -> bool {
    FORBIDDEN_CHAR_RE.is_match(input)
}

/// True if `input` has a SQL keyword standing as its own word.
pub(crate) fn contains_sql_keyword(input: &str) -> bool {
    SQL_KEYWORD_RE.is_match(input)
}

/// True for characters of the base64 alphabet, padding included.
pub(crate) fn is_base64_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '=')
}
