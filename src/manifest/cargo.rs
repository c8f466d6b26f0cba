use std::collections::BTreeMap;

use serde::Deserialize;

use super::{Manifest, ManifestDependency, ManifestKind};
use crate::error::ManifestError;
use crate::types::Ecosystem;

/// Version reported for `{ workspace = true }` entries.
const INHERITED: &str = "workspace";

#[derive(Debug, Deserialize)]
struct CargoToml {
    package: Option<Package>,
    #[serde(default)]
    dependencies: BTreeMap<String, Dependency>,
    #[serde(default, rename = "dev-dependencies")]
    dev_dependencies: BTreeMap<String, Dependency>,
    #[serde(default, rename = "build-dependencies")]
    build_dependencies: BTreeMap<String, Dependency>,
    workspace: Option<Workspace>,
    /// `[target.'cfg(..)'.dependencies]` and friends, keyed by target.
    #[serde(default)]
    target: BTreeMap<String, Target>,
}

#[derive(Debug, Deserialize)]
struct Target {
    #[serde(default)]
    dependencies: BTreeMap<String, Dependency>,
    #[serde(default, rename = "dev-dependencies")]
    dev_dependencies: BTreeMap<String, Dependency>,
    #[serde(default, rename = "build-dependencies")]
    build_dependencies: BTreeMap<String, Dependency>,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Workspace {
    #[serde(default)]
    dependencies: BTreeMap<String, Dependency>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Dependency {
    Simple(String),
    Detailed {
        version: Option<String>,
        path: Option<String>,
        git: Option<String>,
        branch: Option<String>,
        tag: Option<String>,
        rev: Option<String>,
        package: Option<String>,
        workspace: Option<bool>,
    },
}

impl Dependency {
    /// Crate name on the registry; differs from the key when renamed.
    fn package_name<'a>(&'a self, key: &'a str) -> &'a str {
        match self {
            Dependency::Detailed {
                package: Some(package),
                ..
            } => package,
            _ => key,
        }
    }

    fn version(&self) -> String {
        match self {
            Dependency::Simple(version) => version.clone(),
            Dependency::Detailed {
                version,
                path: Some(path),
                ..
            } => match version {
                Some(v) => format!("path:{path}:{v}"),
                None => format!("path:{path}"),
            },
            Dependency::Detailed {
                git: Some(git),
                branch,
                tag,
                rev,
                ..
            } => {
                let reference = branch
                    .as_deref()
                    .or(tag.as_deref())
                    .or(rev.as_deref())
                    .unwrap_or("latest");
                format!("git:{git}#{reference}")
            }
            Dependency::Detailed {
                version: Some(v), ..
            } => v.clone(),
            Dependency::Detailed {
                workspace: Some(true),
                ..
            } => INHERITED.to_string(),
            Dependency::Detailed { .. } => "latest".to_string(),
        }
    }
}

pub(super) fn parse(path: &str, content: &str) -> Result<Manifest, ManifestError> {
    let cargo: CargoToml = toml::from_str(content)
        .map_err(|e| ManifestError::parse("Cargo.toml", path, e.to_string()))?;

    let mut sections = vec![
        cargo.dependencies,
        cargo.dev_dependencies,
        cargo.build_dependencies,
    ];
    for target in cargo.target.into_values() {
        sections.extend([
            target.dependencies,
            target.dev_dependencies,
            target.build_dependencies,
        ]);
    }
    sections.push(cargo.workspace.map(|w| w.dependencies).unwrap_or_default());

    let mut dependencies: Vec<ManifestDependency> = Vec::new();
    for section in sections {
        for (key, dep) in section {
            let name = dep.package_name(&key).to_string();
            let version = dep.version();
            match dependencies.iter_mut().find(|d| d.name == name) {
                // An inherited entry takes the concrete version from the workspace table.
                Some(existing) if existing.version == INHERITED && version != INHERITED => {
                    existing.version = version;
                }
                Some(_) => {}
                None => {
                    dependencies.push(ManifestDependency::new(Ecosystem::Rust, name, version));
                }
            }
        }
    }

    Ok(Manifest {
        kind: ManifestKind::CargoToml,
        path: path.to_string(),
        name: cargo.package.and_then(|p| p.name),
        dependencies,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARGO_CONTENT: &str = r#"
[package]
name = "test_project"
version = "0.1.0"

[dependencies]
serde = "1.0"
tokio = { version = "1.0", features = ["full"] }
axum = { git = "https://github.com/tokio-rs/axum", branch = "main" }
local_dep = { path = "../local_dep" }
webdriver = { package = "thirtyfour", version = "0.32" }

[dev-dependencies]
mockall = "0.11"

[build-dependencies]
cc = "1.0"

[workspace.dependencies]
workspace_dep = "1.0"
"#;

    fn dep(name: &str, version: &str) -> ManifestDependency {
        ManifestDependency::new(Ecosystem::Rust, name, version)
    }

    #[test]
    fn test_parse_cargo_toml() {
        let manifest = parse("Cargo.toml", CARGO_CONTENT).unwrap();

        assert_eq!(manifest.name.as_deref(), Some("test_project"));
        let deps = &manifest.dependencies;
        assert!(deps.contains(&dep("serde", "1.0")));
        assert!(deps.contains(&dep("tokio", "1.0")));
        assert!(deps.contains(&dep("axum", "git:https://github.com/tokio-rs/axum#main")));
        assert!(deps.contains(&dep("local_dep", "path:../local_dep")));
        assert!(deps.contains(&dep("mockall", "0.11")));
        assert!(deps.contains(&dep("cc", "1.0")));
        assert!(deps.contains(&dep("workspace_dep", "1.0")));
    }

    #[test]
    fn test_renamed_dependency_uses_package_name() {
        let manifest = parse("Cargo.toml", CARGO_CONTENT).unwrap();
        assert!(manifest.dependencies.contains(&dep("thirtyfour", "0.32")));
        assert!(!manifest.dependencies.iter().any(|d| d.name == "webdriver"));
    }

    #[test]
    fn test_virtual_workspace() {
        let content = r#"
[workspace]
members = ["a", "b"]

[workspace.dependencies]
serde = { version = "1", features = ["derive"] }
"#;
        let manifest = parse("Cargo.toml", content).unwrap();
        assert!(manifest.name.is_none());
        assert_eq!(manifest.dependencies, vec![dep("serde", "1")]);
    }

    #[test]
    fn test_workspace_inherited() {
        let content = r#"
[package]
name = "member"

[dependencies]
serde = { workspace = true }
"#;
        let manifest = parse("member/Cargo.toml", content).unwrap();
        assert_eq!(manifest.dependencies, vec![dep("serde", "workspace")]);
    }

    #[test]
    fn test_parse_invalid_toml() {
        let err = parse("Cargo.toml", "[package\nname = ").unwrap_err();
        assert!(matches!(err, ManifestError::Parse { kind: "Cargo.toml", .. }));
    }

    #[test]
    fn test_workspace_root_prefers_concrete_version() {
        let content = r#"
[package]
name = "root"

[dependencies]
serde = { workspace = true }

[workspace.dependencies]
serde = "1"
"#;
        let manifest = parse("Cargo.toml", content).unwrap();
        assert_eq!(manifest.dependencies, vec![dep("serde", "1")]);
    }

    #[test]
    fn test_target_dependencies() {
        let content = r#"
[package]
name = "browser"

[target.'cfg(unix)'.dependencies]
thirtyfour = "0.32"

[target.'cfg(windows)'.dev-dependencies]
winapi = "0.3"
"#;
        let manifest = parse("Cargo.toml", content).unwrap();
        assert_eq!(
            manifest.dependencies,
            vec![dep("thirtyfour", "0.32"), dep("winapi", "0.3")]
        );
    }
}
