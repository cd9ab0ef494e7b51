//! Resource set resolution.
//!
//! Expands an ordered list of expressions into the ordered, duplicate-free
//! include set minus the exclude set. Expressions are expanded strictly in
//! input order; the subtraction happens once every expression has been
//! listed, because exclusions apply to the complete include set.

use std::collections::HashSet;

use crate::error::ResolveError;
use crate::expression::PathExpression;
use crate::lookup::LocationResolver;
use crate::matcher::MatcherFactory;
use crate::resource::ResourceRef;

/// Expands resource expressions against an injected location lookup.
///
/// Accumulation state lives only for the duration of one [`expand`] call;
/// nothing persists across invocations.
///
/// [`expand`]: ResourceSetResolver::expand
pub struct ResourceSetResolver<L> {
    lookup: L,
}

impl<L: LocationResolver> ResourceSetResolver<L> {
    /// Create a resolver over the given lookup.
    pub fn new(lookup: L) -> Self {
        ResourceSetResolver { lookup }
    }

    /// Expand expressions in input order and subtract exclusions.
    ///
    /// Blank entries are skipped, not parsed. The result preserves the
    /// first-occurrence order of surviving includes and collapses
    /// duplicates; an empty input yields an empty result. Any parse or
    /// matcher failure aborts the whole call; there is no partial result.
    pub fn expand<I, S>(&self, expressions: I) -> Result<Vec<ResourceRef>, ResolveError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let factory = MatcherFactory::new(&self.lookup);
        let mut includes: Vec<ResourceRef> = Vec::new();
        let mut excludes: HashSet<ResourceRef> = HashSet::new();

        for text in expressions {
            let text = text.as_ref();
            if text.trim().is_empty() {
                continue;
            }
            let expression = PathExpression::parse(text)?;
            let resources = factory.create(&expression)?.list()?;
            tracing::debug!(
                "'{}' matched {} resources",
                expression.raw(),
                resources.len()
            );
            if expression.is_exclusion() {
                excludes.extend(resources);
            } else {
                includes.extend(resources);
            }
        }

        let mut seen = HashSet::new();
        Ok(includes
            .into_iter()
            .filter(|resource| !excludes.contains(resource))
            .filter(|resource| seen.insert(resource.clone()))
            .collect())
    }
}

// ============================================================================
// Tests
// ============================================================================
