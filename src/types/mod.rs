//! Core types shared by the validators.
//!
//! - **Errors**: sentinel validation kinds and the crate error, with thiserror derives
//! - **Config**: URL policy, account policy and observability settings

mod config;
mod errors;

pub use config::{Config, ObservabilityConfig};
pub use errors::{Error, Result, ValidationError};
