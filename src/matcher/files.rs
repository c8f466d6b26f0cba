use regex::Regex;

use crate::error::RegistryError;
use crate::types::{Rule, RuleFiles};

/// A directory entry as seen by file matchers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Bare file name, e.g. `Dockerfile`.
    pub name: String,
    /// Path relative to the scan root, `/` separated.
    pub path: String,
}

impl FileEntry {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

#[derive(Debug)]
pub(crate) enum FileMatcher {
    Names {
        tech: String,
        names: Vec<String>,
    },
    Pattern {
        tech: String,
        regex: Regex,
        match_full_path: bool,
    },
}

impl FileMatcher {
    pub(crate) fn compile(rule: &Rule) -> Result<Option<Self>, RegistryError> {
        let Some(files) = &rule.files else {
            return Ok(None);
        };

        let matcher = match files {
            RuleFiles::List(names) => FileMatcher::Names {
                tech: rule.tech.clone(),
                names: names.clone(),
            },
            RuleFiles::Regex {
                pattern,
                match_full_path,
                ..
            } => {
                let regex = Regex::new(pattern).map_err(|e| {
                    RegistryError::invalid_pattern(&rule.tech, pattern, e.to_string())
                })?;
                FileMatcher::Pattern {
                    tech: rule.tech.clone(),
                    regex,
                    match_full_path: *match_full_path,
                }
            }
        };
        Ok(Some(matcher))
    }

    pub(crate) fn tech(&self) -> &str {
        match self {
            FileMatcher::Names { tech, .. } | FileMatcher::Pattern { tech, .. } => tech,
        }
    }

    /// First entry this matcher accepts, as the value that matched.
    pub(crate) fn find<'a>(&self, files: &'a [FileEntry]) -> Option<&'a str> {
        files.iter().find_map(|file| match self {
            FileMatcher::Names { names, .. } => names
                .iter()
                .any(|n| n == &file.name)
                .then_some(file.name.as_str()),
            FileMatcher::Pattern {
                regex,
                match_full_path,
                ..
            } => {
                let candidate = if *match_full_path {
                    file.path.as_str()
                } else {
                    file.name.as_str()
                };
                regex.is_match(candidate).then_some(candidate)
            }
        })
    }
}
