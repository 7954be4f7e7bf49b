//! Error types for value operations
//!
//! Two kinds of failure flow through [`EvalResult`]:
//!
//! - **Usage errors** ([`EvalError::Fatal`]): the specification asked for
//!   something meaningless, e.g. comparing a set with a non-set value or
//!   applying EXCEPT to a set. These abort the current evaluation step and
//!   surface to the user verbatim.
//! - **Internal errors**: anything else. These propagate unchanged unless the
//!   failing value carries provenance, in which case they are wrapped in
//!   [`EvalError::WithSource`] so the diagnostics layer can point at the
//!   specification expression that produced the value.
//!
//! "Not convertible to a set" is deliberately *not* an error: conversion
//! returns `Ok(None)` and callers must check it.

use std::sync::Arc;
use thiserror::Error;

/// Result type for value operations
pub type EvalResult<T> = Result<T, EvalError>;

/// Location of an expression in the source specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLoc {
    pub line: u32,
    pub column: u32,
}

/// Provenance attached to a value: the specification expression that
/// produced it, and where it appears.
#[derive(Debug, Clone)]
pub struct SourceInfo {
    /// Text of the originating expression
    pub text: Arc<str>,
    /// Position in the specification, when known
    pub loc: Option<SourceLoc>,
}

impl SourceInfo {
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        SourceInfo {
            text: text.into(),
            loc: None,
        }
    }

    pub fn at(text: impl Into<Arc<str>>, line: u32, column: u32) -> Self {
        SourceInfo {
            text: text.into(),
            loc: Some(SourceLoc { line, column }),
        }
    }
}

/// Errors that can occur while operating on values
#[derive(Debug, Error)]
pub enum EvalError {
    /// Fatal usage error, reported to the user as-is
    #[error("{message}")]
    Fatal { message: String },

    /// A finite representation overflowed its bounds (e.g. SUBSET of a set
    /// too large to enumerate)
    #[error("set too large: {message}")]
    TooLarge { message: String },

    /// Invariant violation inside the value layer
    #[error("internal error: {message}")]
    Internal { message: String },

    /// An error annotated with the provenance of the value it occurred in
    #[error("while evaluating `{}`: {cause}", .source.text)]
    WithSource {
        source: SourceInfo,
        #[source]
        cause: Box<EvalError>,
    },
}

impl EvalError {
    pub fn fatal(message: impl Into<String>) -> Self {
        EvalError::Fatal {
            message: message.into(),
        }
    }

    pub fn too_large(message: impl Into<String>) -> Self {
        EvalError::TooLarge {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        EvalError::Internal {
            message: message.into(),
        }
    }

    /// Wrap this error with the provenance of the value it surfaced in.
    ///
    /// Applied at every public operation of a value that carries a source;
    /// repeated wrapping builds a chain from innermost value outward.
    pub fn with_source(self, source: &SourceInfo) -> Self {
        EvalError::WithSource {
            source: source.clone(),
            cause: Box::new(self),
        }
    }

    /// The innermost error, unwrapping any provenance layers
    pub fn root_cause(&self) -> &EvalError {
        match self {
            EvalError::WithSource { cause, .. } => cause.root_cause(),
            other => other,
        }
    }

    /// True for fatal usage errors (possibly wrapped in provenance)
    pub fn is_usage_error(&self) -> bool {
        matches!(self.root_cause(), EvalError::Fatal { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_wrapping_chains() {
        let inner = SourceInfo::new("x \\in S");
        let outer = SourceInfo::at("Init", 3, 1);
        let err = EvalError::fatal("boom").with_source(&inner).with_source(&outer);
        let msg = err.to_string();
        assert!(msg.contains("Init"));
        assert!(matches!(err.root_cause(), EvalError::Fatal { .. }));
        assert!(err.is_usage_error());
    }

    #[test]
    fn internal_is_not_usage_error() {
        let err = EvalError::internal("cache poisoned");
        assert!(!err.is_usage_error());
    }
}
