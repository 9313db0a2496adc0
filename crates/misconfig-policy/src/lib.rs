//! misconfig policy generator
//!
//! Turns a JSON or YAML configuration file into a security policy document
//! with one rule per top-level key.
//!
//! The pipeline runs in four stages:
//! - [`loader`] picks the parser from the file extension, lints YAML and
//!   parses the text into an ordered mapping
//! - [`policy`] maps each top-level entry to a templated [`Rule`]
//! - [`render`] serializes the [`Policy`] as JSON or YAML
//! - [`generator`] chains the stages and writes the output file

pub mod convert;
pub mod generator;
pub mod loader;
pub mod policy;
pub mod render;

pub use generator::PolicyGenerator;
pub use loader::ConfigLoader;
pub use policy::{generate_policy, Policy, PolicyMetadata, PolicyTemplate, Rule};
pub use render::render;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::generator::PolicyGenerator;
    pub use crate::loader::ConfigLoader;
    pub use crate::policy::{generate_policy, Policy, PolicyTemplate, Rule};
    pub use crate::render::render;
    pub use misconfig_core::{ConfigMapping, Error, OutputFormat, Result};
}
