use crate::types::{Ecosystem, Rule, RuleType};

pub fn rule() -> Rule {
    Rule::new("react", "React", RuleType::Framework)
        .with_dependencies([(Ecosystem::Npm, "react")])
        .with_extensions(["tsx", "jsx"])
}
