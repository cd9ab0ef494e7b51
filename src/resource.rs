//! Resource locator handle.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque handle to one matched resource, identified by its locator string.
///
/// Locators are origin-prefixed (`classpath:js/app.js`, `file:/srv/a.js`) or
/// a remote literal returned verbatim. Equality and hashing go by the
/// locator text; the resolver's include/exclude set algebra relies on this.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResourceRef(String);

impl ResourceRef {
    /// Create a resource reference from a locator string.
    pub fn new(locator: impl Into<String>) -> Self {
        ResourceRef(locator.into())
    }

    /// The locator text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the reference, returning the locator text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResourceRef {
    fn from(locator: &str) -> Self {
        ResourceRef(locator.to_string())
    }
}

impl From<String> for ResourceRef {
    fn from(locator: String) -> Self {
        ResourceRef(locator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_by_locator_text() {
        assert_eq!(
            ResourceRef::new("classpath:js/app.js"),
            ResourceRef::from("classpath:js/app.js")
        );
        assert_ne!(
            ResourceRef::new("classpath:js/app.js"),
            ResourceRef::new("file:js/app.js")
        );
    }

    #[test]
    fn display_renders_locator_verbatim() {
        let resource = ResourceRef::new("http://example.com/a.js?v=2");
        assert_eq!(resource.to_string(), "http://example.com/a.js?v=2");
    }

    #[test]
    fn serializes_as_plain_string() {
        let resource = ResourceRef::new("file:/srv/a.js");
        assert_eq!(
            serde_json::to_string(&resource).unwrap(),
            "\"file:/srv/a.js\""
        );
    }
}
