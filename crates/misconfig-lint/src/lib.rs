//! misconfig lint
//!
//! Style and structure checks for YAML documents, run before the document
//! is handed to a parser.
//!
//! The linter works on text, line by line:
//! - [`scanner`] splits the input into classified lines with quoted
//!   scalars masked and comments located
//! - each rule in [`rules`] inspects the scanned document and reports
//!   [`Problem`]s
//! - [`Linter`] builds the rule set from a [`LintConfig`] and collects
//!   findings in line order

pub mod config;
pub mod linter;
pub mod problem;
pub mod rules;
pub mod scanner;

pub use config::LintConfig;
pub use linter::Linter;
pub use problem::{Level, Problem};
pub use rules::LintRule;
pub use scanner::{Document, Line, LineKind};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::LintConfig;
    pub use crate::linter::Linter;
    pub use crate::problem::{Level, Problem};
}
