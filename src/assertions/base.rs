//! Behavior shared by every assertion type.

use std::fmt::Debug;

use super::messages::{ErrorMessageFactory, ShouldBeNull, ShouldNotBeNull};
use super::{AssertionInfo, Failures};

/// The common surface of fluent assertions.
///
/// Implementors hold an optional subject along with its [`AssertionInfo`]
/// and [`Failures`]; everything else is provided.
pub trait AbstractAssert: Sized {
    /// The type of the subject under test.
    type Actual: Debug;

    /// Returns the subject, or `None` if the assertion was built without one.
    fn actual(&self) -> Option<&Self::Actual>;

    /// Returns the bookkeeping for this assertion chain.
    fn info(&self) -> &AssertionInfo;

    /// Returns the bookkeeping for this assertion chain, mutably.
    fn info_mut(&mut self) -> &mut AssertionInfo;

    /// Returns the failure builder used by this assertion.
    fn failures(&self) -> &Failures;

    /// Sets a description shown in front of every failure message.
    #[must_use]
    fn described_as(mut self, description: impl Into<String>) -> Self {
        self.info_mut().set_description(description);
        self
    }

    /// Replaces generated failure messages with `message`.
    #[must_use]
    fn with_fail_message(mut self, message: impl Into<String>) -> Self {
        self.info_mut().set_overriding_error_message(message);
        self
    }

    /// Verifies that the subject is present.
    ///
    /// # Panics
    ///
    /// Panics if the subject is missing.
    #[track_caller]
    fn is_not_null(self) -> Self {
        self.actual_not_null();
        self
    }

    /// Verifies that the subject is missing.
    ///
    /// # Panics
    ///
    /// Panics if the subject is present.
    #[track_caller]
    fn is_null(self) -> Self {
        if let Some(actual) = self.actual() {
            self.fail(&ShouldBeNull::new(actual));
        }
        self
    }

    /// Returns the subject, failing first if it is missing.
    ///
    /// # Panics
    ///
    /// Panics if the subject is missing.
    #[track_caller]
    fn actual_not_null(&self) -> &Self::Actual {
        match self.actual() {
            Some(actual) => actual,
            None => self.fail(&ShouldNotBeNull),
        }
    }

    /// Raises the failure described by `factory`.
    ///
    /// # Panics
    ///
    /// Always.
    #[track_caller]
    fn fail(&self, factory: &dyn ErrorMessageFactory) -> ! {
        self.failures().raise(self.info(), factory)
    }
}
