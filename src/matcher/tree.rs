//! File-system tree matching.

use std::fs;
use std::path::PathBuf;

use walkdir::WalkDir;

use crate::error::ResolveError;
use crate::pattern::AntPattern;
use crate::resource::ResourceRef;

/// Matches files under a base directory.
///
/// The walk applies the same glob semantics as the archive scan, against
/// each file's `/`-joined path relative to the base. Symlink cycles are not
/// guarded here; the walk reports whatever the underlying walker reports.
#[derive(Debug)]
pub struct TreeMatcher {
    base: PathBuf,
    pattern: AntPattern,
}

impl TreeMatcher {
    pub(crate) fn new(base: PathBuf, pattern: &str) -> Result<Self, ResolveError> {
        Ok(TreeMatcher {
            base,
            pattern: AntPattern::new(pattern)?,
        })
    }

    /// Walk the base directory in sorted order and emit a `file:` locator
    /// for every matching file. Directories are never emitted; a missing or
    /// unreadable base fails the whole listing.
    pub fn list(&self) -> Result<Vec<ResourceRef>, ResolveError> {
        let base = fs::canonicalize(&self.base)
            .map_err(|cause| ResolveError::io(self.base.clone(), cause))?;
        tracing::debug!("scanning tree {}", base.display());

        let mut matches = Vec::new();
        for entry in WalkDir::new(&base).sort_by_file_name() {
            let entry = entry.map_err(|cause| {
                let path = cause
                    .path()
                    .map(PathBuf::from)
                    .unwrap_or_else(|| base.clone());
                ResolveError::io(path, cause.into())
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(relative) = entry.path().strip_prefix(&base) else {
                continue;
            };
            let relative = relative
                .to_string_lossy()
                .replace(std::path::MAIN_SEPARATOR, "/");
            if self.pattern.matches(&relative) {
                matches.push(ResourceRef::new(format!("file:{}", entry.path().display())));
            }
        }

        Ok(matches)
    }
}

// ============================================================================
// Tests
// ============================================================================
