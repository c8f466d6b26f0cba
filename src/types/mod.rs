mod ecosystem;
mod rule;

pub use ecosystem::Ecosystem;
pub use rule::{Rule, RuleDependency, RuleFiles, RuleType};
