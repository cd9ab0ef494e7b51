//! Ant path expression parsing.
//!
//! An expression locates resources using the micro-grammar `[~][origin:]path`
//! with Ant-style glob tokens in the path:
//! - `?` matches one character
//! - `*` matches zero or more characters within a path segment
//! - `**` matches zero or more whole segments
//! - a leading `~` marks the expression as an exclusion

use crate::error::ResolveError;

/// A parsed resource expression.
///
/// The normalized path is partitioned into a literal `root_dir` prefix and a
/// glob `pattern` suffix. The boundary sits at the first segment carrying a
/// glob character, or at the last segment when none does, so a fully
/// literal expression still has its final segment as the pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathExpression {
    raw: String,
    exclusion: bool,
    origin: Option<String>,
    root_dir: String,
    pattern: String,
}

impl PathExpression {
    /// Parse an expression. Fails when the trimmed text is empty.
    pub fn parse(text: &str) -> Result<Self, ResolveError> {
        let raw = text.trim();
        if raw.is_empty() {
            return Err(ResolveError::invalid_expression(text, "expression is empty"));
        }

        let exclusion = raw.starts_with('~');
        let rest = if exclusion { &raw[1..] } else { raw };

        // The origin token is everything before a ':' that occurs ahead of
        // the first path separator; the '~' precedes the token itself.
        let origin = match (rest.find(':'), rest.find('/')) {
            (Some(colon), None) => Some(&rest[..colon]),
            (Some(colon), Some(slash)) if colon < slash => Some(&rest[..colon]),
            _ => None,
        };

        let path = match origin {
            Some(token) => &rest[token.len() + 1..],
            None => rest,
        };

        let segments = normalize(path);
        let boundary = segments
            .iter()
            .position(|segment| is_glob(segment))
            .unwrap_or_else(|| segments.len().saturating_sub(1));
        let (root, pattern) = segments.split_at(boundary);

        Ok(PathExpression {
            raw: raw.to_string(),
            exclusion,
            origin: origin.map(str::to_string),
            root_dir: root.join("/"),
            pattern: pattern.join("/"),
        })
    }

    /// The original expression text, trimmed. Never empty.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The expression text without the exclusion marker.
    ///
    /// This is the literal a remote matcher resolves to, so an exclusion
    /// subtracts exactly what its include form would have produced.
    pub fn location(&self) -> &str {
        if self.exclusion {
            &self.raw[1..]
        } else {
            &self.raw
        }
    }

    /// Whether this expression subtracts its matches from the result.
    pub fn is_exclusion(&self) -> bool {
        self.exclusion
    }

    /// The origin token, if the expression carries one.
    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    /// The literal path prefix before the pattern. Empty means the current
    /// location. Never `None` after parsing.
    pub fn root_dir(&self) -> &str {
        &self.root_dir
    }

    /// The glob pattern suffix. Never `None` after parsing.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

fn is_glob(segment: &str) -> bool {
    segment.contains('*') || segment.contains('?')
}

/// Split a path on `/`, collapsing `.` and `..` segments and dropping empty
/// ones. A `..` with nothing left to pop is kept as-is.
fn normalize(path: &str) -> Vec<String> {
    let mut segments: Vec<String> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.last().is_some_and(|last| last != "..") {
                    segments.pop();
                } else {
                    segments.push("..".to_string());
                }
            }
            other => segments.push(other.to_string()),
        }
    }
    segments
}

// ============================================================================
// Tests
// ============================================================================
