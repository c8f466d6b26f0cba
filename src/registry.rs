//! Process-wide catalog of technology rules.
//!
//! A [`Registry`] is built once during startup: the bundled catalog is
//! registered first, then any user rule files. Afterwards it is only read.
//! [`bundled`] exposes an immutable registry holding the bundled catalog.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::{debug, info, trace};

use crate::error::{RegistryError, RuleFileError};
use crate::rules;
use crate::types::Rule;

#[derive(Debug, Default, Clone)]
pub struct Registry {
    rules: Vec<Rule>,
    by_tech: HashMap<String, usize>,
    name_to_key: HashMap<String, String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with every bundled rule.
    pub fn with_bundled() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        rules::register_all(&mut registry)?;
        debug!(count = registry.len(), "bundled rules registered");
        Ok(registry)
    }

    /// Bundled catalog followed by each user rules file, in order.
    pub fn load(rule_files: &[PathBuf]) -> crate::Result<Self> {
        let mut registry = Self::with_bundled()?;
        for path in rule_files {
            let added = registry.load_rules_file(path)?;
            info!(path = %path.display(), added, "user rules loaded");
        }
        Ok(registry)
    }

    /// Adds one rule. A rejected rule leaves the registry untouched.
    pub fn register(&mut self, rule: Rule) -> Result<(), RegistryError> {
        if self.by_tech.contains_key(&rule.tech) {
            return Err(RegistryError::duplicate_tech(&rule.tech, &rule.name));
        }
        validate_dependencies(&rule)?;

        trace!(tech = %rule.tech, deps = rule.dependencies.len(), "registering rule");
        self.by_tech.insert(rule.tech.clone(), self.rules.len());
        self.name_to_key.insert(rule.name.clone(), rule.tech.clone());
        self.rules.push(rule);
        Ok(())
    }

    /// Registers rules in order, stopping at the first rejected one.
    pub fn extend<I>(&mut self, rules: I) -> Result<(), RegistryError>
    where
        I: IntoIterator<Item = Rule>,
    {
        for rule in rules {
            self.register(rule)?;
        }
        Ok(())
    }

    pub fn get(&self, tech: &str) -> Option<&Rule> {
        self.by_tech.get(tech).map(|&idx| &self.rules[idx])
    }

    pub fn get_by_name(&self, name: &str) -> Option<&Rule> {
        self.name_to_key.get(name).and_then(|tech| self.get(tech))
    }

    pub fn contains(&self, tech: &str) -> bool {
        self.by_tech.contains_key(tech)
    }

    /// Rules in registration order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Loads a JSON or YAML rules file and registers its rules.
    ///
    /// The file holds either a list of rules or `{ "rules": [...] }`.
    pub fn load_rules_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, RuleFileError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading user rules");

        let content = fs::read_to_string(path)
            .map_err(|e| RuleFileError::read_error(path, e.to_string()))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let file: RulesFile = match extension {
            "json" => serde_json::from_str(&content)
                .map_err(|e| RuleFileError::parse_error(path, e.to_string()))?,
            "yaml" | "yml" => serde_yaml::from_str(&content)
                .map_err(|e| RuleFileError::parse_error(path, e.to_string()))?,
            _ => return Err(RuleFileError::unsupported_format(extension)),
        };

        let rules = file.into_rules();
        let count = rules.len();

        // Validate the whole file first so a bad entry does not leave it half applied.
        let mut staged = self.clone();
        staged
            .extend(rules)
            .map_err(|source| RuleFileError::Rejected {
                path: path.to_path_buf(),
                source,
            })?;
        *self = staged;

        debug!(count, total = self.len(), "user rules registered");
        Ok(count)
    }
}

fn validate_dependencies(rule: &Rule) -> Result<(), RegistryError> {
    let mut seen = HashSet::new();
    for dep in &rule.dependencies {
        if dep.name.is_empty() {
            return Err(RegistryError::EmptyDependencyName {
                tech: rule.tech.clone(),
                name: rule.name.clone(),
                kind: rule.kind.to_string(),
            });
        }
        if !seen.insert((&dep.ecosystem, dep.name.as_str())) {
            return Err(RegistryError::duplicate_dependency(
                &rule.tech,
                dep.ecosystem.as_str(),
                &dep.name,
            ));
        }
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RulesFile {
    List(Vec<Rule>),
    Wrapped { rules: Vec<Rule> },
}

impl RulesFile {
    fn into_rules(self) -> Vec<Rule> {
        match self {
            RulesFile::List(rules) | RulesFile::Wrapped { rules } => rules,
        }
    }
}

static BUNDLED: OnceLock<Registry> = OnceLock::new();

/// Immutable registry of the bundled catalog, built on first use.
///
/// # Panics
///
/// Panics if the bundled catalog itself is inconsistent.
pub fn bundled() -> &'static Registry {
    BUNDLED.get_or_init(|| {
        Registry::with_bundled().unwrap_or_else(|e| panic!("bundled rules are invalid: {e}"))
    })
}
