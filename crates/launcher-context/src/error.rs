//! Error types for the launch context
//!
//! Property accessors fail with [`InvocationError`] alone; the coarser
//! [`LaunchError`] covers construction, copying, launching and the
//! serialized form.

use launcher_invoke::InvocationError;
use std::path::PathBuf;

/// Main launcher error type
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    /// Settings object could not be loaded, created or bound to its loader
    #[error("cannot create build settings: {0}")]
    Construction(#[source] InvocationError),

    /// A delegated call failed
    #[error(transparent)]
    Invocation(#[from] InvocationError),

    /// Serialized context is malformed
    #[error("invalid launch context document: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Serialized context could not be read or written
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LaunchError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Check if the settings object never came into existence
    #[inline]
    #[must_use]
    pub fn is_construction(&self) -> bool {
        matches!(self, Self::Construction(_))
    }

    /// Underlying invocation failure, if any
    #[inline]
    #[must_use]
    pub fn invocation(&self) -> Option<&InvocationError> {
        match self {
            Self::Construction(err) | Self::Invocation(err) => Some(err),
            Self::Serialization(_) | Self::Io { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use launcher_invoke::CallError;

    #[test]
    fn construction_error_display() {
        let err = LaunchError::Construction(InvocationError::new(
            "grails.util.BuildSettings",
            "loadClass",
            CallError::ClassNotFound("grails.util.BuildSettings".to_string()),
        ));
        assert!(err.is_construction());
        assert!(err.to_string().starts_with("cannot create build settings"));
        assert_eq!(err.invocation().map(InvocationError::operation), Some("loadClass"));
    }

    #[test]
    fn io_error_is_not_an_invocation() {
        let err = LaunchError::io_error(
            "/nowhere/context.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(err.invocation().is_none());
        assert!(err.to_string().contains("/nowhere/context.json"));
    }
}
