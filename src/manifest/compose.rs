use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::debug;

use super::{Manifest, ManifestDependency, ManifestKind};
use crate::error::ManifestError;
use crate::types::Ecosystem;

#[derive(Debug, Deserialize)]
struct DockerCompose {
    services: Option<BTreeMap<String, Service>>,
}

#[derive(Debug, Deserialize)]
struct Service {
    image: Option<String>,
}

/// `docker-compose.yml`, `docker-compose.yaml` and variants such as
/// `docker-compose.prod.yml`.
pub(super) fn is_compose_file(name: &str) -> bool {
    name.starts_with("docker-compose") && (name.ends_with(".yml") || name.ends_with(".yaml"))
}

/// Splits an image reference into repository name and version.
///
/// The version is the digest for `name@sha256:...`, else the tag, else
/// `latest`. The name drops any registry host and the `library/` namespace,
/// so `docker.io/library/postgres:15` reads as `postgres`.
fn split_image(image: &str) -> (&str, &str) {
    let (reference, version) = match image.split_once('@') {
        Some((reference, digest)) => (reference, Some(digest)),
        None => (image, None),
    };

    // A colon before the last slash belongs to a registry port.
    let last_slash = reference.rfind('/').map_or(0, |i| i + 1);
    let (name, tag) = match reference[last_slash..].find(':') {
        Some(idx) => {
            let split = last_slash + idx;
            (&reference[..split], &reference[split + 1..])
        }
        None => (reference, "latest"),
    };

    (repository(name), version.unwrap_or(tag))
}

fn repository(name: &str) -> &str {
    let name = match name.split_once('/') {
        Some((host, rest)) if host.contains(['.', ':']) || host == "localhost" => rest,
        _ => name,
    };
    name.strip_prefix("library/").unwrap_or(name)
}

pub(super) fn parse(path: &str, content: &str) -> Result<Manifest, ManifestError> {
    let compose: DockerCompose = serde_yaml::from_str(content)
        .map_err(|e| ManifestError::parse("docker-compose", path, e.to_string()))?;

    let Some(services) = compose.services else {
        debug!(path, "compose file has no services");
        return Ok(Manifest {
            kind: ManifestKind::DockerCompose,
            path: path.to_string(),
            name: None,
            dependencies: Vec::new(),
        });
    };

    let mut dependencies = Vec::new();
    for (service, definition) in services {
        let Some(image) = definition.image else {
            continue;
        };
        // Interpolated images cannot be resolved statically.
        if image.starts_with('$') {
            debug!(path, service = %service, "skipping interpolated image");
            continue;
        }
        let (name, tag) = split_image(&image);
        dependencies.push(ManifestDependency::new(Ecosystem::Docker, name, tag));
    }

    Ok(Manifest {
        kind: ManifestKind::DockerCompose,
        path: path.to_string(),
        name: None,
        dependencies,
    })
}
