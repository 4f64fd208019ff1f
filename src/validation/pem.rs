//! PEM / base64 key material shape check.
//!
//! Accepts either armored blocks (`-----BEGIN <LABEL>-----` … `-----END
//! <LABEL>-----`) with base64 bodies, or a single raw base64 run. The content
//! is never decoded.

use super::patterns::{
    contains_forbidden_char, contains_sql_keyword, is_base64_char, PEM_BEGIN_RE, PEM_BLOCK_RE,
    RAW_BASE64_RE,
};
use crate::types::ValidationError;

/// Validate that `value` looks like PEM-armored or raw base64 key material.
pub fn validate_pem_encoded_key(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        tracing::debug!("pem rejected: empty input");
        return Err(ValidationError::InvalidPemInput);
    }

    if contains_forbidden_char(value) {
        tracing::debug!("pem rejected: forbidden token");
        return Err(ValidationError::InvalidPemInput);
    }

    // Armored bodies are pure base64, so only a raw run can spell out a
    // bare keyword.
    let shape_ok = if PEM_BEGIN_RE.is_match(value) {
        armored_ok(value)
    } else if contains_sql_keyword(value) {
        tracing::debug!("pem rejected: forbidden token");
        false
    } else {
        RAW_BASE64_RE.is_match(value)
    };
    if !shape_ok {
        tracing::debug!("pem rejected: not armored or raw base64");
        return Err(ValidationError::InvalidPemInput);
    }

    Ok(())
}

/// Every block must pair matching labels around a base64 body, and nothing
/// but whitespace may sit between or around the blocks.
fn armored_ok(value: &str) -> bool {
    let mut cursor = 0;
    let mut blocks = 0;

    for caps in PEM_BLOCK_RE.captures_iter(value) {
        let (Some(block), Some(begin), Some(body), Some(end)) =
            (caps.get(0), caps.get(1), caps.get(2), caps.get(3))
        else {
            return false;
        };

        if !value[cursor..block.start()].trim().is_empty() {
            return false;
        }
        if begin.as_str().trim() != end.as_str().trim() {
            tracing::debug!(
                "pem rejected: BEGIN {} closed by END {}",
                begin.as_str(),
                end.as_str()
            );
            return false;
        }

        let body = body.as_str();
        if !body.chars().any(is_base64_char)
            || !body
                .chars()
                .all(|c| is_base64_char(c) || c.is_whitespace())
        {
            return false;
        }

        cursor = block.end();
        blocks += 1;
    }

    blocks > 0 && value[cursor..].trim().is_empty()
}
