use crate::types::{Ecosystem, Rule, RuleFiles, RuleType};

pub fn rule() -> Rule {
    Rule::new("docker", "Docker", RuleType::Tool)
        .with_files(RuleFiles::List(vec![
            ".dockerignore".to_string(),
            "Dockerfile".to_string(),
            "docker-compose.yml".to_string(),
            "docker-compose.yaml".to_string(),
        ]))
        .with_dependencies([(Ecosystem::GithubAction, "docker/login-action")])
}
