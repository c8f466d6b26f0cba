//! Technology rules.
//!
//! A registry of technology detection rules: each rule names a tool,
//! language or service and the packages, container images and CI actions
//! that reveal it in a project. A compiled [`matcher::RuleIndex`] answers
//! "which technology does this package belong to", and the [`scanner`]
//! applies it to a whole directory.
pub mod cli;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod matcher;
pub mod output;
pub mod registry;
pub mod rules;
pub mod scanner;
pub mod types;

pub use error::{Error, Result};
pub use matcher::{Matcher, RuleIndex};
pub use registry::Registry;
pub use scanner::{ScanReport, Scanner};
pub use types::{Ecosystem, Rule, RuleDependency, RuleType};
