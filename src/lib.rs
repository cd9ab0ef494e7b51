//! rexpand: Ant-style resource expression resolution.
//!
//! Resolves declarative resource-location expressions into ordered lists of
//! locators drawn from three origins:
//! - `classpath:` roots looked up on a search path of directories and
//!   archive containers
//! - `file:` roots scanned on the file system
//! - anything else treated as a remote literal
//!
//! Expressions use Ant-style glob tokens (`?`, `*`, `**`) and combine with
//! include/exclude set algebra: a leading `~` subtracts an expression's
//! matches from the final list.
//!
//! ```no_run
//! use rexpand::{ResourceSetResolver, SearchPath};
//!
//! let resolver = ResourceSetResolver::new(SearchPath::new(vec!["lib".into()]));
//! let resources = resolver.expand([
//!     "classpath:/js/**/*.js",
//!     "~classpath:/js/**/*Test.js",
//! ])?;
//! # Ok::<(), rexpand::ResolveError>(())
//! ```

pub mod content;
pub mod error;
pub mod expression;
pub mod lookup;
pub mod matcher;
pub mod pattern;
pub mod resolver;
pub mod resource;

pub use error::{ErrorCode, ResolveError};
pub use expression::PathExpression;
pub use lookup::{Location, LocationResolver, SearchPath};
pub use matcher::{MatcherFactory, OriginMatcher};
pub use pattern::AntPattern;
pub use resolver::ResourceSetResolver;
pub use resource::ResourceRef;
