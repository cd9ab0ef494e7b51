//! Archive entry matching.
//!
//! Archive containers expose a flat namespace of `/`-delimited entry names.
//! Matching works on the name suffix below the expression's root: strip the
//! entry-root prefix, glob-match the remainder, emit an origin-prefixed
//! locator.

use std::collections::HashSet;
use std::fs::File;
use std::path::PathBuf;

use zip::ZipArchive;

use crate::error::ResolveError;
use crate::expression::PathExpression;
use crate::lookup::Location;
use crate::matcher::CLASSPATH_ORIGIN;
use crate::pattern::AntPattern;
use crate::resource::ResourceRef;

/// Matches entries inside the archive containers exposing one lookup root.
///
/// More than one container may expose the same logical root; identical
/// entries across containers collapse to a single locator.
#[derive(Debug)]
pub struct ArchiveMatcher {
    origin: String,
    entry_root: String,
    pattern: AntPattern,
    containers: Vec<PathBuf>,
}

impl ArchiveMatcher {
    /// Build from the resolved locations of the expression's root.
    /// Directory locations are ignored; only containers are scanned.
    pub(crate) fn new(
        expression: &PathExpression,
        locations: Vec<Location>,
    ) -> Result<Self, ResolveError> {
        let root = expression.root_dir();
        let entry_root = if root.is_empty() {
            String::new()
        } else {
            format!("{root}/")
        };
        let containers = locations
            .into_iter()
            .filter_map(|location| match location {
                Location::Archive(path) => Some(path),
                Location::Directory(_) => None,
            })
            .collect();

        Ok(ArchiveMatcher {
            origin: expression.origin().unwrap_or(CLASSPATH_ORIGIN).to_string(),
            entry_root,
            pattern: AntPattern::new(expression.pattern())?,
            containers,
        })
    }

    /// Enumerate every entry of every container and emit a locator for each
    /// match under the entry root. Entries are visited in sorted order so
    /// the result is stable across container implementations; directory
    /// placeholder entries are never emitted.
    pub fn list(&self) -> Result<Vec<ResourceRef>, ResolveError> {
        let mut seen = HashSet::new();
        let mut matches = Vec::new();

        for container in &self.containers {
            tracing::debug!("scanning container {}", container.display());
            for name in self.entry_names(container)? {
                if name.ends_with('/') {
                    continue;
                }
                let Some(relative) = name.strip_prefix(&self.entry_root) else {
                    continue;
                };
                if self.pattern.matches(relative) {
                    let locator =
                        ResourceRef::new(format!("{}:{}{relative}", self.origin, self.entry_root));
                    if seen.insert(locator.clone()) {
                        matches.push(locator);
                    }
                }
            }
        }

        Ok(matches)
    }

    /// Entry names of one container, sorted. The container handle is closed
    /// before this returns, on success and on failure alike.
    fn entry_names(&self, container: &PathBuf) -> Result<Vec<String>, ResolveError> {
        let file = File::open(container).map_err(|cause| ResolveError::io(container, cause))?;
        let archive =
            ZipArchive::new(file).map_err(|cause| ResolveError::io(container, cause.into()))?;
        let mut names: Vec<String> = archive.file_names().map(str::to_string).collect();
        names.sort();
        Ok(names)
    }
}

// ============================================================================
// Tests
// ============================================================================
