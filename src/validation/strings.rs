//! Batch string sanitisation.

use super::patterns::STRING_ALLOW_RE;
use crate::types::ValidationError;

/// Accept the batch only if every string is made of alphanumerics and
/// `_ . / -` (the empty string included).
///
/// Stops at the first offending string; which one failed is not reported.
pub fn validate_strings<S: AsRef<str>>(values: &[S]) -> Result<(), ValidationError> {
    if let Some(index) = values
        .iter()
        .position(|value| !STRING_ALLOW_RE.is_match(value.as_ref()))
    {
        tracing::debug!("string batch rejected at index {}", index);
        return Err(ValidationError::InvalidInput);
    }
    Ok(())
}
