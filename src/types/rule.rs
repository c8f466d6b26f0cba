use serde::{Deserialize, Serialize};
use std::fmt;

use super::Ecosystem;

/// Category of a technology.
///
/// Open set, like [`Ecosystem`]: unknown categories survive a round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RuleType {
    Tool,
    Language,
    Framework,
    Db,
    Analytics,
    Hosting,
    Cloud,
    Ci,
    Other(String),
}

impl RuleType {
    pub fn as_str(&self) -> &str {
        match self {
            RuleType::Tool => "tool",
            RuleType::Language => "language",
            RuleType::Framework => "framework",
            RuleType::Db => "db",
            RuleType::Analytics => "analytics",
            RuleType::Hosting => "hosting",
            RuleType::Cloud => "cloud",
            RuleType::Ci => "ci",
            RuleType::Other(s) => s,
        }
    }
}

impl From<&str> for RuleType {
    fn from(value: &str) -> Self {
        match value {
            "tool" => RuleType::Tool,
            "language" => RuleType::Language,
            "framework" => RuleType::Framework,
            "db" => RuleType::Db,
            "analytics" => RuleType::Analytics,
            "hosting" => RuleType::Hosting,
            "cloud" => RuleType::Cloud,
            "ci" => RuleType::Ci,
            other => RuleType::Other(other.to_string()),
        }
    }
}

impl From<String> for RuleType {
    fn from(value: String) -> Self {
        RuleType::from(value.as_str())
    }
}

impl From<RuleType> for String {
    fn from(value: RuleType) -> Self {
        match value {
            RuleType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One way a technology shows up as a concrete package, image or action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDependency {
    #[serde(rename = "type")]
    pub ecosystem: Ecosystem,

    /// Anchored regex over the ecosystem's package identifier.
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

impl RuleDependency {
    pub fn new(ecosystem: Ecosystem, name: impl Into<String>) -> Self {
        Self {
            ecosystem,
            name: name.into(),
            example: None,
        }
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }
}

/// File-name based detection for a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleFiles {
    /// Exact file names, compared against the entry name.
    List(Vec<String>),
    Regex {
        #[serde(rename = "regex")]
        pattern: String,
        #[serde(default, rename = "matchFullPath")]
        match_full_path: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        example: Option<String>,
    },
}

/// A recognized technology and its footprints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    pub tech: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: RuleType,
    #[serde(default)]
    pub dependencies: Vec<RuleDependency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<RuleFiles>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extensions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

impl Rule {
    pub fn new(tech: impl Into<String>, name: impl Into<String>, kind: RuleType) -> Self {
        Self {
            tech: tech.into(),
            name: name.into(),
            kind,
            dependencies: Vec::new(),
            files: None,
            extensions: Vec::new(),
            example: None,
        }
    }

    /// Appends one `(ecosystem, name)` dependency per entry, in order.
    pub fn with_dependencies<I, S>(mut self, deps: I) -> Self
    where
        I: IntoIterator<Item = (Ecosystem, S)>,
        S: Into<String>,
    {
        self.dependencies.extend(
            deps.into_iter()
                .map(|(eco, name)| RuleDependency::new(eco, name)),
        );
        self
    }

    pub fn with_dependency(mut self, dep: RuleDependency) -> Self {
        self.dependencies.push(dep);
        self
    }

    pub fn with_files(mut self, files: RuleFiles) -> Self {
        self.files = Some(files);
        self
    }

    pub fn with_extensions<I, S>(mut self, exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions.extend(exts.into_iter().map(Into::into));
        self
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    pub fn ecosystems(&self) -> Vec<&Ecosystem> {
        let mut seen: Vec<&Ecosystem> = Vec::new();
        for dep in &self.dependencies {
            if !seen.contains(&&dep.ecosystem) {
                seen.push(&dep.ecosystem);
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deserialize_wire_shape() {
        let json = r#"{
            "tech": "selenium",
            "name": "Selenium",
            "type": "tool",
            "dependencies": [
                { "type": "npm", "name": "selenium-webdriver" },
                { "type": "githubAction", "name": "Xotabu4/selenoid-github-action" }
            ]
        }"#;

        let rule: Rule = serde_json::from_str(json).unwrap();
        assert_eq!(rule.tech, "selenium");
        assert_eq!(rule.kind, RuleType::Tool);
        assert_eq!(
            rule.dependencies,
            vec![
                RuleDependency::new(Ecosystem::Npm, "selenium-webdriver"),
                RuleDependency::new(Ecosystem::GithubAction, "Xotabu4/selenoid-github-action"),
            ]
        );
        assert!(rule.files.is_none());
        assert!(rule.extensions.is_empty());
    }

    #[test]
    fn test_serialize_uses_type_key() {
        let rule = Rule::new("pg", "Postgres", RuleType::Db)
            .with_dependencies([(Ecosystem::Npm, "pg")]);
        let value = serde_json::to_value(&rule).unwrap();

        assert_eq!(value["type"], "db");
        assert_eq!(value["dependencies"][0]["type"], "npm");
        assert_eq!(value["dependencies"][0]["name"], "pg");
        assert!(value.get("files").is_none());
        assert!(value.get("extensions").is_none());
    }

    #[test]
    fn test_files_variants() {
        let list: RuleFiles = serde_json::from_str(r#"["Dockerfile", ".dockerignore"]"#).unwrap();
        assert_eq!(
            list,
            RuleFiles::List(vec!["Dockerfile".to_string(), ".dockerignore".to_string()])
        );

        let regex: RuleFiles = serde_yaml::from_str("regex: '^docker-compose.*\\.ya?ml$'").unwrap();
        match regex {
            RuleFiles::Regex {
                pattern,
                match_full_path,
                ..
            } => {
                assert_eq!(pattern, r"^docker-compose.*\.ya?ml$");
                assert!(!match_full_path);
            }
            other => panic!("expected regex variant, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_rule_type_kept() {
        let kind = RuleType::from("saas");
        assert_eq!(kind, RuleType::Other("saas".to_string()));
        assert_eq!(kind.to_string(), "saas");
    }

    #[test]
    fn test_ecosystems_in_first_seen_order() {
        let rule = Rule::new("x", "X", RuleType::Tool).with_dependencies([
            (Ecosystem::Npm, "a"),
            (Ecosystem::Php, "b"),
            (Ecosystem::Npm, "c"),
        ]);
        assert_eq!(rule.ecosystems(), vec![&Ecosystem::Npm, &Ecosystem::Php]);
    }
}
