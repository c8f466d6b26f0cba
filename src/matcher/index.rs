use std::collections::{BTreeSet, HashMap, HashSet};

use regex::Regex;
use tracing::{debug, trace};

use super::files::{FileEntry, FileMatcher};
use super::{Matcher, Matches};
use crate::error::RegistryError;
use crate::registry::Registry;
use crate::types::Ecosystem;

#[derive(Debug)]
struct DependencyMatcher {
    pattern: Regex,
    tech: String,
}

#[derive(Debug)]
struct ExtensionMatcher {
    tech: String,
    extensions: HashSet<String>,
}

/// Compiled, read-only view of a [`Registry`] used for detection.
#[derive(Debug)]
pub struct RuleIndex {
    dependencies: HashMap<Ecosystem, Vec<DependencyMatcher>>,
    files: Vec<FileMatcher>,
    extensions: Vec<ExtensionMatcher>,
}

impl RuleIndex {
    pub fn build(registry: &Registry) -> Result<Self, RegistryError> {
        let mut dependencies: HashMap<Ecosystem, Vec<DependencyMatcher>> = Ecosystem::KNOWN
            .into_iter()
            .map(|eco| (eco, Vec::new()))
            .collect();
        let mut files = Vec::new();
        let mut extensions = Vec::new();

        for rule in registry.rules() {
            for dep in &rule.dependencies {
                if dep.name.is_empty() {
                    return Err(RegistryError::EmptyDependencyName {
                        tech: rule.tech.clone(),
                        name: rule.name.clone(),
                        kind: rule.kind.to_string(),
                    });
                }

                let pattern = dependency_pattern(&dep.ecosystem, &dep.name);
                let pattern = Regex::new(&pattern).map_err(|e| {
                    RegistryError::invalid_pattern(&rule.tech, &dep.name, e.to_string())
                })?;
                dependencies
                    .entry(dep.ecosystem.clone())
                    .or_default()
                    .push(DependencyMatcher {
                        pattern,
                        tech: rule.tech.clone(),
                    });
            }

            if let Some(matcher) = FileMatcher::compile(rule)? {
                files.push(matcher);
            }

            if !rule.extensions.is_empty() {
                extensions.push(ExtensionMatcher {
                    tech: rule.tech.clone(),
                    extensions: rule.extensions.iter().cloned().collect(),
                });
            }
        }

        debug!(
            rules = registry.len(),
            file_matchers = files.len(),
            extension_matchers = extensions.len(),
            "rule index built"
        );
        Ok(Self {
            dependencies,
            files,
            extensions,
        })
    }

    pub fn dependency_count(&self, ecosystem: &Ecosystem) -> usize {
        self.dependencies.get(ecosystem).map_or(0, Vec::len)
    }
}

/// Package names match whole identifiers. Deno dependencies are import
/// URLs, so their patterns are searched anywhere in the URL.
fn dependency_pattern(ecosystem: &Ecosystem, name: &str) -> String {
    match ecosystem {
        Ecosystem::Deno => name.to_string(),
        _ => format!("^{name}$"),
    }
}

impl Matcher for RuleIndex {
    fn match_dependencies(&self, pkgs: &[String], ecosystem: &Ecosystem) -> Matches {
        let mut matched = Matches::new();
        let Some(matchers) = self.dependencies.get(ecosystem) else {
            trace!(%ecosystem, "no matchers for ecosystem");
            return matched;
        };

        for pkg in pkgs {
            for matcher in matchers {
                if matcher.pattern.is_match(pkg) {
                    let reasons = matched.entry(matcher.tech.clone()).or_default();
                    let reason = format!("matched: {pkg}");
                    if !reasons.contains(&reason) {
                        reasons.push(reason);
                    }
                }
            }
        }

        trace!(%ecosystem, packages = pkgs.len(), techs = matched.len(), "matched dependencies");
        matched
    }

    fn match_files(&self, files: &[FileEntry]) -> Matches {
        let mut matched = Matches::new();
        for matcher in &self.files {
            if let Some(hit) = matcher.find(files) {
                matched
                    .entry(matcher.tech().to_string())
                    .or_default()
                    .push(format!("matched file: {hit}"));
            }
        }
        matched
    }

    fn match_extensions(&self, extensions: &BTreeSet<String>) -> Matches {
        let mut matched = Matches::new();
        for matcher in &self.extensions {
            if let Some(ext) = extensions.iter().find(|e| matcher.extensions.contains(*e)) {
                matched
                    .entry(matcher.tech.clone())
                    .or_default()
                    .push(format!("matched extension: {ext}"));
            }
        }
        matched
    }
}
