use crate::types::{Ecosystem, Rule, RuleType};

pub fn rule() -> Rule {
    Rule::new("typescript", "Typescript", RuleType::Language)
        .with_dependencies([(Ecosystem::Npm, "typescript")])
        .with_extensions(["ts", "tsx"])
        .with_example("tsconfig.json")
}
