//! Dependency manifests understood by the scanner.
//!
//! Each reader turns one manifest file into a flat list of
//! `(ecosystem, name, version)` entries that the rule index can match.

mod cargo;
mod compose;
mod npm;

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::ManifestError;
use crate::types::Ecosystem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ManifestKind {
    PackageJson,
    CargoToml,
    DockerCompose,
}

impl ManifestKind {
    /// Recognizes a manifest by its file name.
    pub fn detect(file_name: &str) -> Option<Self> {
        match file_name {
            "package.json" => Some(Self::PackageJson),
            "Cargo.toml" => Some(Self::CargoToml),
            name if compose::is_compose_file(name) => Some(Self::DockerCompose),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PackageJson => "package.json",
            Self::CargoToml => "Cargo.toml",
            Self::DockerCompose => "docker-compose",
        }
    }

    pub fn ecosystem(&self) -> Ecosystem {
        match self {
            Self::PackageJson => Ecosystem::Npm,
            Self::CargoToml => Ecosystem::Rust,
            Self::DockerCompose => Ecosystem::Docker,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestDependency {
    #[serde(rename = "type")]
    pub ecosystem: Ecosystem,
    pub name: String,
    pub version: String,
}

impl ManifestDependency {
    pub fn new(ecosystem: Ecosystem, name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            ecosystem,
            name: name.into(),
            version: version.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    pub kind: ManifestKind,
    /// Path relative to the scan root.
    pub path: String,
    /// Declared project name, when the manifest has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub dependencies: Vec<ManifestDependency>,
}

impl Manifest {
    pub fn parse(kind: ManifestKind, path: &str, content: &str) -> Result<Self, ManifestError> {
        match kind {
            ManifestKind::PackageJson => npm::parse(path, content),
            ManifestKind::CargoToml => cargo::parse(path, content),
            ManifestKind::DockerCompose => compose::parse(path, content),
        }
    }

    pub fn read(kind: ManifestKind, file: &Path, rel_path: &str) -> Result<Self, ManifestError> {
        let content = fs::read_to_string(file).map_err(|e| ManifestError::read(file, e))?;
        Self::parse(kind, rel_path, &content)
    }

    pub fn package_names(&self) -> Vec<String> {
        self.dependencies.iter().map(|d| d.name.clone()).collect()
    }
}
