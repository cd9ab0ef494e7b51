//! Remote literal matching.

use url::Url;

use crate::error::ResolveError;
use crate::expression::PathExpression;
use crate::resource::ResourceRef;

/// Treats the whole expression text as a single literal location.
///
/// Validation is syntactic only: the locator must parse as an absolute
/// URL. Nothing is fetched here; fetching, retries, and authentication
/// belong to the network collaborators around this crate.
#[derive(Debug)]
pub struct RemoteMatcher {
    location: String,
}

impl RemoteMatcher {
    pub(crate) fn new(expression: &PathExpression) -> Self {
        RemoteMatcher {
            location: expression.location().to_string(),
        }
    }

    /// The sole match is the supplied text, returned verbatim.
    pub fn list(&self) -> Result<Vec<ResourceRef>, ResolveError> {
        Url::parse(&self.location)
            .map_err(|cause| ResolveError::invalid_expression(&self.location, cause.to_string()))?;
        Ok(vec![ResourceRef::new(self.location.clone())])
    }
}
