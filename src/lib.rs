//! # Inputguard - input validation helpers
//!
//! Stateless predicates for untrusted configuration and user input:
//! - Required environment variables are present
//! - URLs have an allowed scheme, an exact path and no stray components
//! - String batches and account credentials stick to safe character classes
//! - Key material looks like PEM-armored or raw base64
//!
//! Every validator returns `Ok(())` or a [`ValidationError`] kind. Callers
//! branch on the kind; the message text is fixed and carries no input detail.
//!
//! ```
//! use std::collections::HashSet;
//! use inputguard::{validate_url, ValidationError};
//!
//! let schemes = HashSet::from(["http", "https"]);
//! assert!(validate_url("https://example.com/tds/", &schemes, "/tds/").is_ok());
//! assert_eq!(
//!     validate_url("ftp://example.com/tds/", &schemes, "/tds/"),
//!     Err(ValidationError::UnsupportedProtocol)
//! );
//! ```

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod types;
pub mod validation;

// Internal utilities
pub mod observability;

pub use types::{Config, Error, ObservabilityConfig, Result, ValidationError};
pub use validation::{
    missing_env_vars, validate_account, validate_env_list, validate_pem_encoded_key,
    validate_strings, validate_url, AccountPolicy, UrlPolicy,
};
