//! Error types for the invocation layer
//!
//! Two levels:
//! - [`CallError`]: what went wrong in one dynamic call, as seen by [`crate::invoke`]
//! - [`InvocationError`]: the single uniform kind [`crate::invoke_or_wrap`]
//!   raises for every `CallError`

use crate::value::{signature, ParamType, Value};

/// Boxed failure raised by a target's own code
pub type TargetError = Box<dyn std::error::Error + Send + Sync>;

/// Failure of a single dynamic call
#[derive(Debug, thiserror::Error)]
pub enum CallError {
    /// Loader could not resolve a class
    #[error("class not found: {0}")]
    ClassNotFound(String),

    /// Target has no operation with this name and signature
    #[error("no operation {operation}({}) on {class}", signature(.params))]
    NoSuchOperation {
        class: String,
        operation: String,
        params: Vec<ParamType>,
    },

    /// Arguments do not fit the declared parameter types
    #[error("arguments ({}) do not match {operation}({})", .actual.join(", "), signature(.expected))]
    ArgumentMismatch {
        operation: String,
        expected: Vec<ParamType>,
        actual: Vec<&'static str>,
    },

    /// Operation returned a value of the wrong shape
    #[error("expected {expected} result, got {actual}")]
    UnexpectedResult {
        expected: &'static str,
        actual: &'static str,
    },

    /// Operation ran and failed
    #[error("{class}.{operation} failed: {source}")]
    TargetFailure {
        class: String,
        operation: String,
        #[source]
        source: TargetError,
    },
}

impl CallError {
    /// Create missing-operation error
    pub fn no_such_operation(
        class: impl Into<String>,
        operation: impl Into<String>,
        params: &[ParamType],
    ) -> Self {
        Self::NoSuchOperation {
            class: class.into(),
            operation: operation.into(),
            params: params.to_vec(),
        }
    }

    /// Create failure raised by the target itself
    pub fn target_failure(
        class: impl Into<String>,
        operation: impl Into<String>,
        source: impl Into<TargetError>,
    ) -> Self {
        Self::TargetFailure {
            class: class.into(),
            operation: operation.into(),
            source: source.into(),
        }
    }

    pub(crate) fn unexpected(expected: &'static str, actual: &Value) -> Self {
        Self::UnexpectedResult {
            expected,
            actual: actual.kind(),
        }
    }
}

/// A dynamic call failed
///
/// Raised uniformly for a missing operation, mismatched arguments, a result
/// of the wrong shape, or a failure inside the target. The original
/// [`CallError`] is kept as the source.
#[derive(Debug, thiserror::Error)]
#[error("invocation of {operation} on {target} failed: {source}")]
pub struct InvocationError {
    target: String,
    operation: String,
    #[source]
    source: CallError,
}

impl InvocationError {
    /// Wrap a call failure
    pub fn new(target: impl Into<String>, operation: impl Into<String>, source: CallError) -> Self {
        Self {
            target: target.into(),
            operation: operation.into(),
            source,
        }
    }

    /// Class name of the target
    #[inline]
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Operation that failed
    #[inline]
    #[must_use]
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Underlying call failure
    #[inline]
    #[must_use]
    pub fn cause(&self) -> &CallError {
        &self.source
    }

    /// Take the underlying call failure
    #[inline]
    #[must_use]
    pub fn into_cause(self) -> CallError {
        self.source
    }
}
