//! Directory scanning.
//!
//! The scanner walks a project tree, collects file names, extensions and
//! manifests, and asks a [`Matcher`] which technologies they point to.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, trace, warn};
use walkdir::WalkDir;

use crate::error::ScanError;
use crate::manifest::{Manifest, ManifestKind};
use crate::matcher::{merge_matches, FileEntry, Matcher, Matches};

/// Directories never descended into.
pub const IGNORED_DIRS: &[&str] = &["node_modules", "dist", "build", "target", ".git"];

#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanReport {
    pub files_scanned: usize,
    /// Detected techs with sorted, unique reasons.
    pub techs: BTreeMap<String, Vec<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub manifests: Vec<Manifest>,
}

impl ScanReport {
    pub fn detected(&self) -> Vec<&str> {
        self.techs.keys().map(String::as_str).collect()
    }

    pub fn contains(&self, tech: &str) -> bool {
        self.techs.contains_key(tech)
    }
}

pub struct Scanner<'a, M: Matcher + ?Sized> {
    matcher: &'a M,
}

impl<'a, M: Matcher + ?Sized> Scanner<'a, M> {
    pub fn new(matcher: &'a M) -> Self {
        Self { matcher }
    }

    pub fn scan(&self, root: &Path) -> Result<ScanReport, ScanError> {
        if !root.exists() {
            return Err(ScanError::directory_not_found(root));
        }
        if !root.is_dir() {
            return Err(ScanError::not_a_directory(root));
        }

        info!(root = %root.display(), "scanning");

        let mut files_by_dir: BTreeMap<String, Vec<FileEntry>> = BTreeMap::new();
        let mut extensions = BTreeSet::new();
        let mut manifests = Vec::new();
        let mut files_scanned = 0;

        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_ignored_dir(e));

        for entry in walker {
            let entry = entry.map_err(|e| ScanError::Walk {
                path: root.to_path_buf(),
                source: e,
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            files_scanned += 1;

            let name = entry.file_name().to_string_lossy().into_owned();
            let rel = relative_path(root, entry.path());
            let dir = match rel.rsplit_once('/') {
                Some((dir, _)) => dir.to_string(),
                None => String::new(),
            };
            trace!(path = %rel, "file");

            if let Some(ext) = entry.path().extension() {
                extensions.insert(ext.to_string_lossy().into_owned());
            }

            if let Some(kind) = ManifestKind::detect(&name) {
                match Manifest::read(kind, entry.path(), &rel) {
                    Ok(manifest) => {
                        debug!(
                            path = %rel,
                            kind = kind.as_str(),
                            dependencies = manifest.dependencies.len(),
                            "manifest parsed"
                        );
                        manifests.push(manifest);
                    }
                    Err(e) => warn!("skipping manifest: {e}"),
                }
            }

            files_by_dir
                .entry(dir)
                .or_default()
                .push(FileEntry::new(name, rel));
        }

        let mut techs = Matches::new();

        for files in files_by_dir.values() {
            merge_matches(&mut techs, self.matcher.match_files(files));
        }

        for manifest in &manifests {
            let matched = self
                .matcher
                .match_dependencies(&manifest.package_names(), &manifest.kind.ecosystem());
            merge_matches(&mut techs, matched);
        }

        // Extensions only count for techs nothing more specific found.
        let by_extension: Matches = self
            .matcher
            .match_extensions(&extensions)
            .into_iter()
            .filter(|(tech, _)| !techs.contains_key(tech))
            .collect();
        merge_matches(&mut techs, by_extension);

        for reasons in techs.values_mut() {
            reasons.sort();
            reasons.dedup();
        }

        info!(
            files = files_scanned,
            techs = techs.len(),
            manifests = manifests.len(),
            "scan complete"
        );

        Ok(ScanReport {
            files_scanned,
            techs,
            manifests,
        })
    }
}

fn is_ignored_dir(entry: &walkdir::DirEntry) -> bool {
    entry.file_type().is_dir()
        && IGNORED_DIRS.contains(&entry.file_name().to_string_lossy().as_ref())
}

/// `/`-separated path of `path` below `root`.
fn relative_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
