use crate::types::{Ecosystem, Rule, RuleDependency, RuleFiles, RuleType};

pub fn rule() -> Rule {
    Rule::new("nodejs", "NodeJS", RuleType::Language)
        .with_files(RuleFiles::List(vec![
            "package.json".to_string(),
            ".nvmrc".to_string(),
        ]))
        .with_dependency(RuleDependency::new(Ecosystem::Docker, "nodejs").with_example("nodejs:0.0.0"))
        .with_dependencies([
            (Ecosystem::Docker, "node"),
            (Ecosystem::Docker, "circleci/node"),
            (Ecosystem::Docker, "cimg/node"),
            (Ecosystem::Docker, "bitnami/node"),
            (Ecosystem::Docker, "okteto/node"),
        ])
}
