mod files;
mod index;

pub use files::FileEntry;
pub use index::RuleIndex;

use std::collections::{BTreeMap, BTreeSet};

use crate::types::Ecosystem;

/// Detected techs mapped to the reasons they matched.
pub type Matches = BTreeMap<String, Vec<String>>;

pub trait Matcher: Send + Sync {
    fn match_dependencies(&self, pkgs: &[String], ecosystem: &Ecosystem) -> Matches;

    fn match_files(&self, files: &[FileEntry]) -> Matches;

    fn match_extensions(&self, extensions: &BTreeSet<String>) -> Matches;

    /// First tech matching a single package, if any.
    fn match_dependency(&self, pkg: &str, ecosystem: &Ecosystem) -> Option<String> {
        self.match_dependencies(&[pkg.to_string()], ecosystem)
            .into_keys()
            .next()
    }
}

/// Merges `other` into `into`, keeping reasons unique and in arrival order.
pub fn merge_matches(into: &mut Matches, other: Matches) {
    for (tech, reasons) in other {
        let entry = into.entry(tech).or_default();
        for reason in reasons {
            if !entry.contains(&reason) {
                entry.push(reason);
            }
        }
    }
}
