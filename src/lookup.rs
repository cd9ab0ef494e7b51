//! Root location lookup.
//!
//! A classpath-style root names a logical directory that may be backed by
//! zero or more physical locations: plain directories, or entry prefixes
//! inside archive containers. That mapping is modeled as the
//! `LocationResolver` collaborator and injected where needed, so matchers
//! never reach into ambient global state; `SearchPath` is the production
//! implementation over an ordered list of search entries.

use std::fs::File;
use std::path::{Path, PathBuf};

use zip::ZipArchive;

use crate::error::ResolveError;

// ============================================================================
// Locations
// ============================================================================

/// One physical location backing a lookup root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// The root maps to a plain directory.
    Directory(PathBuf),
    /// The root maps to entries inside an archive container.
    Archive(PathBuf),
}

/// Maps a classpath-style root to its physical locations.
///
/// Implementations return every location exposing the root, in search
/// order; an empty list means the root does not exist anywhere. A leading
/// `/` on the root is not significant.
pub trait LocationResolver {
    fn resolve(&self, root: &str) -> Result<Vec<Location>, ResolveError>;
}

// ============================================================================
// Search Path
// ============================================================================

/// Ordered search path of directories and archive files.
///
/// The analogue of a classpath: a directory entry exposes a root when the
/// root exists as a subdirectory; an archive entry exposes a root when any
/// archive entry lives under it. Entries that do not exist on disk are
/// skipped, like stale classpath elements.
#[derive(Debug, Clone, Default)]
pub struct SearchPath {
    entries: Vec<PathBuf>,
}

impl SearchPath {
    /// Create a search path from entries in priority order.
    pub fn new(entries: Vec<PathBuf>) -> Self {
        SearchPath { entries }
    }

    /// Append an entry to the search path.
    pub fn push(&mut self, entry: impl Into<PathBuf>) {
        self.entries.push(entry.into());
    }

    /// Whether any entry of the archive lives under the root.
    fn archive_exposes(archive: &Path, root: &str) -> Result<bool, ResolveError> {
        let file = File::open(archive).map_err(|cause| ResolveError::io(archive, cause))?;
        let container =
            ZipArchive::new(file).map_err(|cause| ResolveError::io(archive, cause.into()))?;
        if root.is_empty() {
            return Ok(true);
        }
        let prefix = format!("{root}/");
        let exposed = container
            .file_names()
            .any(|name| name == root || name.starts_with(&prefix));
        Ok(exposed)
    }
}

impl LocationResolver for SearchPath {
    fn resolve(&self, root: &str) -> Result<Vec<Location>, ResolveError> {
        let root = root.trim_start_matches('/');
        let mut found = Vec::new();

        for entry in &self.entries {
            if entry.is_dir() {
                let candidate = if root.is_empty() {
                    entry.clone()
                } else {
                    entry.join(root)
                };
                if candidate.is_dir() {
                    found.push(Location::Directory(candidate));
                }
            } else if entry.is_file() && Self::archive_exposes(entry, root)? {
                found.push(Location::Archive(entry.clone()));
            }
        }

        tracing::debug!("root '{}' resolved to {} locations", root, found.len());
        Ok(found)
    }
}

// ============================================================================
// Tests
// ============================================================================
