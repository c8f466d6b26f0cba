use std::collections::BTreeMap;

use serde::Deserialize;

use super::{Manifest, ManifestDependency, ManifestKind};
use crate::error::ManifestError;
use crate::types::Ecosystem;

#[derive(Debug, Deserialize)]
struct PackageJson {
    name: Option<String>,
    #[serde(default)]
    dependencies: BTreeMap<String, String>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: BTreeMap<String, String>,
}

pub(super) fn parse(path: &str, content: &str) -> Result<Manifest, ManifestError> {
    let package: PackageJson = serde_json::from_str(content)
        .map_err(|e| ManifestError::parse("package.json", path, e.to_string()))?;

    let mut deps = package.dependencies;
    deps.extend(package.dev_dependencies);

    Ok(Manifest {
        kind: ManifestKind::PackageJson,
        path: path.to_string(),
        name: package.name,
        dependencies: deps
            .into_iter()
            .map(|(name, version)| ManifestDependency::new(Ecosystem::Npm, name, version))
            .collect(),
    })
}
