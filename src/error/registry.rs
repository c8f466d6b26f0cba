use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("already registered: {tech} ({name})")]
    DuplicateTech { tech: String, name: String },

    #[error("duplicate dependency {ecosystem}/{dependency} in rule {tech}")]
    DuplicateDependency {
        tech: String,
        ecosystem: String,
        dependency: String,
    },

    #[error("empty dependency name for {name} ({kind} > {tech})")]
    EmptyDependencyName {
        tech: String,
        name: String,
        kind: String,
    },

    #[error("invalid pattern '{pattern}' in rule {tech}: {message}")]
    InvalidPattern {
        tech: String,
        pattern: String,
        message: String,
    },
}

impl RegistryError {
    pub fn duplicate_tech(tech: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateTech {
            tech: tech.into(),
            name: name.into(),
        }
    }

    pub fn duplicate_dependency(
        tech: impl Into<String>,
        ecosystem: impl Into<String>,
        dependency: impl Into<String>,
    ) -> Self {
        Self::DuplicateDependency {
            tech: tech.into(),
            ecosystem: ecosystem.into(),
            dependency: dependency.into(),
        }
    }

    pub fn invalid_pattern(
        tech: impl Into<String>,
        pattern: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidPattern {
            tech: tech.into(),
            pattern: pattern.into(),
            message: message.into(),
        }
    }
}
