//! Ant-style glob matching.
//!
//! Patterns match `/`-separated relative paths: `?` matches one character,
//! `*` matches zero or more characters within a segment, `**` matches zero
//! or more whole segments. Built on globset with the literal separator
//! option so `*` and `?` never cross a `/`.

use globset::{GlobBuilder, GlobMatcher};

use crate::error::ResolveError;

/// A compiled glob pattern with Ant path semantics.
///
/// The archive and tree matchers share this type so both origins match with
/// identical semantics.
#[derive(Debug, Clone)]
pub struct AntPattern {
    raw: String,
    matcher: GlobMatcher,
}

impl AntPattern {
    /// Compile a pattern. Fails on malformed glob syntax.
    pub fn new(pattern: &str) -> Result<Self, ResolveError> {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|cause| ResolveError::invalid_expression(pattern, cause.to_string()))?;
        Ok(AntPattern {
            raw: pattern.to_string(),
            matcher: glob.compile_matcher(),
        })
    }

    /// Match a `/`-separated relative path against the pattern.
    pub fn matches(&self, path: &str) -> bool {
        self.matcher.is_match(path)
    }

    /// The pattern text as supplied.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(text: &str) -> AntPattern {
        AntPattern::new(text).unwrap()
    }

    #[test]
    fn question_mark_matches_exactly_one_character() {
        let p = pattern("ba?");
        assert!(p.matches("bar"));
        assert!(p.matches("baz"));
        assert!(!p.matches("ba"));
        assert!(!p.matches("barn"));
    }

    #[test]
    fn star_stays_within_a_segment() {
        let p = pattern("src/*.js");
        assert!(p.matches("src/Foo.js"));
        assert!(!p.matches("src/sub/Foo.js"));
        assert!(!p.matches("Foo.js"));
    }

    #[test]
    fn double_star_crosses_segments() {
        let p = pattern("**/ba?");
        assert!(p.matches("bar"));
        assert!(p.matches("foo/bar"));
        assert!(p.matches("foo/baz/bar"));
        assert!(!p.matches("foo/barn"));
    }

    #[test]
    fn double_star_suffix_matches_whole_subtrees() {
        let p = pattern("js/**/*.js");
        assert!(p.matches("js/app.js"));
        assert!(p.matches("js/vendor/lib/core.js"));
        assert!(!p.matches("css/app.css"));
    }

    #[test]
    fn literal_pattern_matches_only_itself() {
        let p = pattern("test.ext");
        assert!(p.matches("test.ext"));
        assert!(!p.matches("sub/test.ext"));
        assert!(!p.matches("test_ext"));
    }

    #[test]
    fn question_mark_does_not_cross_separator() {
        let p = pattern("a?b");
        assert!(p.matches("axb"));
        assert!(!p.matches("a/b"));
    }
}
