//! Error definitions
//!
//! This module provides error types for testkit-bytes.

use thiserror::Error;

/// Main error type for testkit-bytes
///
/// Assertion failures are not represented here: they panic, failing the
/// enclosing test. This type only carries errors raised while reading a
/// byte source, which checks hand back to the caller untouched.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error from the byte source under test
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Injected failure
    #[error("Injected failure: {0}")]
    InjectedFailure(String),
}

impl Error {
    /// Create an injected failure error.
    #[must_use]
    pub fn injected_failure(message: impl Into<String>) -> Self {
        Self::InjectedFailure(message.into())
    }

    /// Returns the underlying I/O error, if any.
    #[must_use]
    pub fn as_io(&self) -> Option<&std::io::Error> {
        match self {
            Self::Io(err) => Some(err),
            Self::InjectedFailure(_) => None,
        }
    }

    /// Returns `true` if this error, or the I/O error it wraps, was produced
    /// by failure injection.
    #[must_use]
    pub fn is_injected(&self) -> bool {
        match self {
            Self::InjectedFailure(_) => true,
            Self::Io(err) => err
                .get_ref()
                .and_then(|inner| inner.downcast_ref::<Error>())
                .is_some_and(Error::is_injected),
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error_is_transparent() {
        let err = Error::from(io::Error::new(io::ErrorKind::NotFound, "missing"));
        assert_eq!(err.to_string(), "missing");
        assert_eq!(err.as_io().map(io::Error::kind), Some(io::ErrorKind::NotFound));
        assert!(!err.is_injected());
    }

    #[test]
    fn test_injected_failure_through_io() {
        let inner = Error::injected_failure("disk gone");
        assert_eq!(inner.to_string(), "Injected failure: disk gone");

        let err = Error::from(io::Error::other(inner));
        assert!(err.is_injected());
    }
}
