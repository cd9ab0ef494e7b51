//! Error types and error code constants for rexpand.
//!
//! This module provides the unified error type (`ResolveError`) for the
//! whole resolution pipeline, plus stable numeric codes used as the CLI
//! exit status.
//!
//! ## Design
//!
//! - **Unified type**: `ResolveError` is the single error type crossing the
//!   public API boundary
//! - **No partial success**: every variant is unrecoverable at its origin
//!   and aborts the expansion that raised it
//! - **Code mapping**: `ErrorCode` provides stable integer codes for the CLI

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Stable numeric codes for the CLI exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ErrorCode {
    /// Malformed expression text (empty input, bad glob, bad remote locator).
    InvalidExpression = 2,
    /// A classpath root with no physical location.
    ResourceNotFound = 3,
    /// Failure opening or reading an archive or directory tree.
    ResourceIo = 4,
}

impl ErrorCode {
    /// Get the numeric code value.
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ============================================================================
// Unified Error Type
// ============================================================================

/// Unified error type for resource resolution.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Malformed expression text.
    #[error("invalid expression '{expression}': {reason}")]
    InvalidExpression { expression: String, reason: String },

    /// A classpath-origin root could not be located anywhere.
    #[error("resource not found: {root}")]
    ResourceNotFound { root: String },

    /// Failure opening or reading an archive or file-system tree.
    #[error("cannot read {}: {source}", .path.display())]
    ResourceIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

// ============================================================================
// Convenience Constructors
// ============================================================================

impl ResolveError {
    /// Create an invalid expression error.
    pub fn invalid_expression(expression: impl Into<String>, reason: impl Into<String>) -> Self {
        ResolveError::InvalidExpression {
            expression: expression.into(),
            reason: reason.into(),
        }
    }

    /// Create a resource not found error for a lookup root.
    pub fn not_found(root: impl Into<String>) -> Self {
        ResolveError::ResourceNotFound { root: root.into() }
    }

    /// Create an IO error for an archive or tree path.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ResolveError::ResourceIo {
            path: path.into(),
            source,
        }
    }

    /// Get the exit code for this error.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ResolveError::InvalidExpression { .. } => ErrorCode::InvalidExpression,
            ResolveError::ResourceNotFound { .. } => ErrorCode::ResourceNotFound,
            ResolveError::ResourceIo { .. } => ErrorCode::ResourceIo,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
