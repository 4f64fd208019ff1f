//! Required environment variable checks.

use std::collections::BTreeSet;
use std::env;

use crate::types::ValidationError;

/// Names from `names` that are not set in the process environment.
///
/// A variable set to the empty string counts as present. Names that can never
/// be set (empty, or containing `=` or NUL) are reported missing without a
/// lookup.
pub fn missing_env_vars<S: AsRef<str>>(names: &[S]) -> BTreeSet<String> {
    names
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| !is_settable_name(name) || env::var_os(name).is_none())
        .map(str::to_string)
        .collect()
}

/// Check that every name in `names` is set.
///
/// Returns the missing names alongside the outcome. The error carries no
/// detail; the returned set is how callers learn which names are absent.
pub fn validate_env_list<S: AsRef<str>>(
    names: &[S],
) -> (BTreeSet<String>, Result<(), ValidationError>) {
    let missing = missing_env_vars(names);
    if missing.is_empty() {
        return (missing, Ok(()));
    }

    tracing::debug!(
        "{} of {} required environment variables missing: {:?}",
        missing.len(),
        names.len(),
        missing
    );
    (missing, Err(ValidationError::MissingRequiredEnv))
}

fn is_settable_name(name: &str) -> bool {
    !name.is_empty() && !name.contains('=') && !name.contains('\0')
}
