use crate::types::{Ecosystem, Rule, RuleFiles, RuleType};

pub fn rule() -> Rule {
    Rule::new("rust", "Rust", RuleType::Language)
        .with_files(RuleFiles::List(vec!["Cargo.toml".to_string()]))
        .with_extensions(["rs"])
        .with_dependencies([
            (Ecosystem::Docker, "rust"),
            (Ecosystem::Docker, "cimg/rust"),
            (Ecosystem::Docker, "circleci/rust"),
            (Ecosystem::Docker, "rustlang/rust"),
        ])
}
