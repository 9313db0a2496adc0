//! misconfig core
//!
//! Types shared across the policy generator crates.
//!
//! This crate provides:
//! - The error type and result alias used by every pipeline stage
//! - Input and output format detection
//! - The ordered configuration mapping produced by the loader

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{value_kind, ConfigMapping, InputFormat, OutputFormat};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{ConfigMapping, InputFormat, OutputFormat};
}
