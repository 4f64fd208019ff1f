//! Username and password rules.
//!
//! The rules are a placeholder policy: lengths and the password symbol set
//! are configurable through [`AccountPolicy`].

use serde::{Deserialize, Serialize};

use super::patterns::USERNAME_RE;
use crate::types::ValidationError;

const DEFAULT_PASSWORD_SYMBOLS: &str = "_#?!@$%^&*-";

/// Account credential policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccountPolicy {
    /// Minimum username length in characters.
    pub username_min_len: usize,

    /// Maximum username length in characters.
    pub username_max_len: usize,

    /// Minimum password length in characters.
    pub password_min_len: usize,

    /// Maximum password length in characters.
    pub password_max_len: usize,

    /// Punctuation allowed in passwords on top of ASCII alphanumerics.
    pub password_symbols: String,
}

impl Default for AccountPolicy {
    fn default() -> Self {
        Self {
            username_min_len: 1,
            username_max_len: 32,
            password_min_len: 8,
            password_max_len: 64,
            password_symbols: DEFAULT_PASSWORD_SYMBOLS.to_string(),
        }
    }
}

impl AccountPolicy {
    /// Validate a username/password pair. Either rule failing rejects both.
    pub fn validate(&self, username: &str, password: &str) -> Result<(), ValidationError> {
        if !self.username_ok(username) {
            tracing::debug!("account rejected: username does not satisfy policy");
            return Err(ValidationError::InvalidAccountInput);
        }
        if !self.password_ok(password) {
            tracing::debug!("account rejected: password does not satisfy policy");
            return Err(ValidationError::InvalidAccountInput);
        }
        Ok(())
    }

    fn username_ok(&self, username: &str) -> bool {
        let len = username.chars().count();
        (self.username_min_len..=self.username_max_len).contains(&len)
            && USERNAME_RE.is_match(username)
    }

    fn password_ok(&self, password: &str) -> bool {
        let len = password.chars().count();
        (self.password_min_len..=self.password_max_len).contains(&len)
            && password
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || self.password_symbols.contains(c))
    }
}

/// Validate credentials against the default [`AccountPolicy`].
pub fn validate_account(username: &str, password: &str) -> Result<(), ValidationError> {
    AccountPolicy::default().validate(username, password)
}
