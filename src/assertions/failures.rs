//! Building and raising assertion failures.

use thiserror::Error;

use super::messages::ErrorMessageFactory;
use super::{AssertionInfo, Configuration};

/// A failed check, ready to be raised.
///
/// Carries the final message along with the rendered values the failing
/// check compared, when the check reports them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct AssertionError {
    message: String,
    actual: Option<String>,
    expected: Option<String>,
}

impl AssertionError {
    /// Returns the failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the rendered actual value, if the check reported one.
    #[must_use]
    pub fn actual(&self) -> Option<&str> {
        self.actual.as_deref()
    }

    /// Returns the rendered expected value, if the check reported one.
    #[must_use]
    pub fn expected(&self) -> Option<&str> {
        self.expected.as_deref()
    }
}

/// Turns failed checks into [`AssertionError`]s.
///
/// # Example
///
/// ```rust
/// use testkit_bytes::assertions::{AssertionInfo, Failures, ShouldNotBeNull};
///
/// let error = Failures::new().failure(&AssertionInfo::new(), &ShouldNotBeNull);
/// assert_eq!(error.message(), "\nExpecting actual not to be null");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Failures {
    configuration: Configuration,
}

impl Failures {
    /// Creates failures using the default [`Configuration`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates failures using the given configuration.
    #[must_use]
    pub fn with_configuration(configuration: Configuration) -> Self {
        Self { configuration }
    }

    /// Returns the configuration used to render messages.
    #[must_use]
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Builds the failure for a check described by `factory`.
    ///
    /// An overriding error message set on `info` replaces the generated
    /// message; the description prefix is kept either way.
    pub fn failure(
        &self,
        info: &AssertionInfo,
        factory: &dyn ErrorMessageFactory,
    ) -> AssertionError {
        let message = match info.overriding_error_message() {
            Some(overriding) => format!("{}{overriding}", info.description_prefix()),
            None => factory.create(info, &self.configuration),
        };
        AssertionError {
            message,
            actual: factory.actual().map(str::to_owned),
            expected: factory.expected().map(str::to_owned),
        }
    }

    /// Builds the failure for `factory` and panics with it.
    ///
    /// # Panics
    ///
    /// Always.
    #[track_caller]
    pub fn raise(&self, info: &AssertionInfo, factory: &dyn ErrorMessageFactory) -> ! {
        let error = self.failure(info, factory);
        tracing::debug!(
            actual = error.actual(),
            expected = error.expected(),
            "assertion failed"
        );
        panic!("{error}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assertions::{ShouldBeEqual, ShouldHaveSize, ShouldNotBeNull};
    use crate::source;

    #[test]
    fn test_failure_carries_values() {
        let error = Failures::new().failure(
            &AssertionInfo::new(),
            &ShouldHaveSize::new(&source::wrap(vec![0]), 1, 0),
        );
        assert_eq!(error.actual(), Some("1"));
        assert_eq!(error.expected(), Some("0"));
        assert_eq!(error.to_string(), error.message());
    }

    #[test]
    fn test_configuration_drives_layout() {
        let failures = Failures::with_configuration(Configuration::new().multiline());
        assert_eq!(failures.configuration().max_single_line_length, 0);
        assert_eq!(Failures::new().configuration(), &Configuration::default());

        let error = failures.failure(
            &AssertionInfo::new(),
            &ShouldBeEqual::new(&source::wrap(vec![1]), &source::wrap(vec![2])),
        );
        assert_eq!(error.message(), "\nexpected: wrap(02)\n but was: wrap(01)");
    }

    #[test]
    fn test_overriding_message_keeps_description() {
        let mut info = AssertionInfo::new();
        info.set_description("header");
        info.set_overriding_error_message("bad header");

        let error = Failures::new().failure(&info, &ShouldNotBeNull);
        assert_eq!(error.message(), "[header] bad header");
    }

    #[test]
    #[should_panic(expected = "Expecting actual not to be null")]
    fn test_raise_panics() {
        Failures::new().raise(&AssertionInfo::new(), &ShouldNotBeNull);
    }
}
