//! Origin-specific matchers and their selection.
//!
//! Exactly three origins exist (archived classpath resources, plain
//! file-system trees, and remote literals), so the matcher is a closed enum
//! rather than an open trait. `MatcherFactory` picks the variant from the
//! expression's origin token and the shape of the looked-up root.

mod archive;
mod remote;
mod tree;

pub use archive::ArchiveMatcher;
pub use remote::RemoteMatcher;
pub use tree::TreeMatcher;

use std::path::PathBuf;

use crate::error::ResolveError;
use crate::expression::PathExpression;
use crate::lookup::{Location, LocationResolver};
use crate::resource::ResourceRef;

/// Origin token for classpath-style lookups.
pub const CLASSPATH_ORIGIN: &str = "classpath";
/// Origin token for direct file-system roots.
pub const FILE_ORIGIN: &str = "file";

// ============================================================================
// Origin Matcher
// ============================================================================

/// A matcher bound to one parsed expression.
#[derive(Debug)]
pub enum OriginMatcher {
    /// Scans entries inside archive containers.
    Archive(ArchiveMatcher),
    /// Scans a file-system tree.
    Tree(TreeMatcher),
    /// Returns a remote literal unchanged.
    Remote(RemoteMatcher),
}

impl OriginMatcher {
    /// List every resource matching the expression, in deterministic order.
    pub fn list(&self) -> Result<Vec<ResourceRef>, ResolveError> {
        match self {
            OriginMatcher::Archive(matcher) => matcher.list(),
            OriginMatcher::Tree(matcher) => matcher.list(),
            OriginMatcher::Remote(matcher) => matcher.list(),
        }
    }
}

// ============================================================================
// Factory
// ============================================================================

/// Selects and builds the matcher variant for an expression.
pub struct MatcherFactory<'a> {
    lookup: &'a dyn LocationResolver,
}

impl<'a> MatcherFactory<'a> {
    /// Create a factory resolving classpath roots through `lookup`.
    pub fn new(lookup: &'a dyn LocationResolver) -> Self {
        MatcherFactory { lookup }
    }

    /// Build the matcher for an expression.
    ///
    /// Dispatch rules, evaluated in order:
    /// 1. classpath root whose first physical location is an archive
    ///    container → [`ArchiveMatcher`] over the archive locations
    /// 2. classpath root backed by a directory → [`TreeMatcher`] rooted there
    /// 3. `file` origin → [`TreeMatcher`] at the root dir, or `.` when empty
    /// 4. any other origin, or none → [`RemoteMatcher`] on the literal text
    ///
    /// Fails with `ResourceNotFound` when a classpath root resolves to no
    /// physical location at all.
    pub fn create(&self, expression: &PathExpression) -> Result<OriginMatcher, ResolveError> {
        match expression.origin() {
            Some(CLASSPATH_ORIGIN) => {
                let locations = self.lookup.resolve(expression.root_dir())?;
                match locations.first() {
                    Some(Location::Archive(_)) => Ok(OriginMatcher::Archive(
                        ArchiveMatcher::new(expression, locations)?,
                    )),
                    Some(Location::Directory(dir)) => Ok(OriginMatcher::Tree(TreeMatcher::new(
                        dir.clone(),
                        expression.pattern(),
                    )?)),
                    None => Err(ResolveError::not_found(expression.root_dir())),
                }
            }
            Some(FILE_ORIGIN) => {
                let base = if expression.root_dir().is_empty() {
                    PathBuf::from(".")
                } else {
                    PathBuf::from(expression.root_dir())
                };
                Ok(OriginMatcher::Tree(TreeMatcher::new(
                    base,
                    expression.pattern(),
                )?))
            }
            _ => Ok(OriginMatcher::Remote(RemoteMatcher::new(expression))),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;

    use tempfile::TempDir;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    use crate::lookup::SearchPath;

    fn expression(text: &str) -> PathExpression {
        PathExpression::parse(text).unwrap()
    }

    fn write_archive(path: &std::path::Path, entries: &[&str]) {
        let file = File::create(path).unwrap();
        let mut writer = ZipWriter::new(file);
        for entry in entries {
            writer
                .start_file(*entry, SimpleFileOptions::default())
                .unwrap();
            writer.write_all(b"// content").unwrap();
        }
        writer.finish().unwrap();
    }

    #[test]
    fn classpath_root_in_archive_selects_archive_matcher() {
        let dir = TempDir::new().unwrap();
        let jar = dir.path().join("app.jar");
        write_archive(&jar, &["js/app.js"]);

        let search = SearchPath::new(vec![jar]);
        let factory = MatcherFactory::new(&search);
        let matcher = factory.create(&expression("classpath:/js/*.js")).unwrap();

        assert!(matches!(matcher, OriginMatcher::Archive(_)));
    }

    #[test]
    fn classpath_root_on_disk_selects_tree_matcher() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("js")).unwrap();

        let search = SearchPath::new(vec![dir.path().to_path_buf()]);
        let factory = MatcherFactory::new(&search);
        let matcher = factory.create(&expression("classpath:/js/*.js")).unwrap();

        assert!(matches!(matcher, OriginMatcher::Tree(_)));
    }

    #[test]
    fn archive_wins_when_it_comes_first_on_the_search_path() {
        let dir = TempDir::new().unwrap();
        let jar = dir.path().join("app.jar");
        write_archive(&jar, &["js/app.js"]);
        fs::create_dir_all(dir.path().join("js")).unwrap();

        let search = SearchPath::new(vec![jar, dir.path().to_path_buf()]);
        let factory = MatcherFactory::new(&search);
        let matcher = factory.create(&expression("classpath:/js/*.js")).unwrap();

        assert!(matches!(matcher, OriginMatcher::Archive(_)));
    }

    #[test]
    fn file_origin_selects_tree_matcher() {
        let search = SearchPath::default();
        let factory = MatcherFactory::new(&search);
        let matcher = factory.create(&expression("file:src/*.js")).unwrap();

        assert!(matches!(matcher, OriginMatcher::Tree(_)));
    }

    #[test]
    fn unknown_origin_selects_remote_matcher() {
        let search = SearchPath::default();
        let factory = MatcherFactory::new(&search);

        let matcher = factory
            .create(&expression("http://example.com/a.js"))
            .unwrap();
        assert!(matches!(matcher, OriginMatcher::Remote(_)));

        let matcher = factory.create(&expression("foo/bar/test.ext")).unwrap();
        assert!(matches!(matcher, OriginMatcher::Remote(_)));
    }

    #[test]
    fn unresolvable_classpath_root_is_not_found() {
        let search = SearchPath::default();
        let factory = MatcherFactory::new(&search);

        let result = factory.create(&expression("classpath:/does/not/exist/**/*.js"));
        assert!(matches!(
            result,
            Err(ResolveError::ResourceNotFound { root }) if root == "does/not/exist"
        ));
    }
}
