//! Input validators.
//!
//! Every validator is a pure, synchronous predicate that returns `Ok(())` or
//! one [`ValidationError`](crate::types::ValidationError) kind. None of them
//! depend on each other; the only process state touched is a read-only
//! environment lookup in [`validate_env_list`].

mod account;
mod env;
mod patterns;
mod pem;
mod strings;
mod url;

pub use account::{validate_account, AccountPolicy};
pub use env::{missing_env_vars, validate_env_list};
pub use pem::validate_pem_encoded_key;
pub use strings::validate_strings;
pub use self::url::{validate_url, UrlPolicy};
