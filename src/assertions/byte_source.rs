//! Assertions on [`ByteSource`]s.

use crate::error::Result;
use crate::source::ByteSource;

use super::messages::{ShouldBeEmpty, ShouldBeEqual, ShouldHaveSize};
use super::{AbstractAssert, AssertionInfo, Configuration, Failures};

/// Fluent assertions for a [`ByteSource`].
///
/// Created by [`assert_that`](super::assert_that) or
/// [`assert_that_option`](super::assert_that_option). Checks that read the
/// source return any I/O error it raises as [`Error::Io`](crate::Error::Io),
/// unchanged; failed checks panic.
///
/// # Example
///
/// ```rust
/// use testkit_bytes::prelude::*;
///
/// # fn main() -> testkit_bytes::Result<()> {
/// let actual = source::wrap(vec![1, 2]);
///
/// assert_that(&actual)
///     .has_size(2)?
///     .has_same_content_as(&source::wrap(vec![1, 2]))?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ByteSourceAssert<S> {
    actual: Option<S>,
    info: AssertionInfo,
    failures: Failures,
}

impl<S: ByteSource> ByteSourceAssert<S> {
    pub(crate) fn new(actual: Option<S>) -> Self {
        Self {
            actual,
            info: AssertionInfo::new(),
            failures: Failures::new(),
        }
    }

    /// Renders failure messages with `configuration`.
    #[must_use]
    pub fn with_configuration(mut self, configuration: Configuration) -> Self {
        self.failures = Failures::with_configuration(configuration);
        self
    }

    /// Verifies that the subject holds the same bytes as `other`.
    ///
    /// ```rust
    /// use testkit_bytes::prelude::*;
    ///
    /// # fn main() -> testkit_bytes::Result<()> {
    /// let actual = source::wrap(vec![0u8; 1]);
    /// let other = source::wrap(vec![0u8; 1]);
    ///
    /// assert_that(&actual).has_same_content_as(&other)?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised while reading either source.
    ///
    /// # Panics
    ///
    /// Panics if the subject is missing or its content differs from `other`.
    #[track_caller]
    pub fn has_same_content_as<O>(self, other: &O) -> Result<Self>
    where
        O: ByteSource + ?Sized,
    {
        let actual = self.actual_not_null();
        tracing::debug!(actual = ?actual, other = ?other, "verifying same content");
        if !actual.content_equals(&other)? {
            self.fail(&ShouldBeEqual::new(actual, &other));
        }
        Ok(self)
    }

    /// Verifies that the subject holds no bytes.
    ///
    /// ```rust
    /// use testkit_bytes::prelude::*;
    ///
    /// # fn main() -> testkit_bytes::Result<()> {
    /// assert_that(source::empty()).is_empty()?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised while reading the source.
    ///
    /// # Panics
    ///
    /// Panics if the subject is missing or not empty.
    #[track_caller]
    pub fn is_empty(self) -> Result<()> {
        let actual = self.actual_not_null();
        tracing::debug!(actual = ?actual, "verifying empty");
        if !actual.is_empty()? {
            self.fail(&ShouldBeEmpty::new(actual));
        }
        Ok(())
    }

    /// Verifies that the subject holds exactly `expected_size` bytes.
    ///
    /// ```rust
    /// use testkit_bytes::prelude::*;
    ///
    /// # fn main() -> testkit_bytes::Result<()> {
    /// assert_that(source::wrap(vec![0u8; 9])).has_size(9)?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised while reading the source.
    ///
    /// # Panics
    ///
    /// Panics if the subject is missing or its size differs from `expected_size`.
    #[track_caller]
    pub fn has_size(self, expected_size: u64) -> Result<Self> {
        let actual = self.actual_not_null();
        let actual_size = actual.size()?;
        tracing::debug!(actual_size, expected_size, "verifying size");
        if actual_size != expected_size {
            self.fail(&ShouldHaveSize::new(actual, actual_size, expected_size));
        }
        Ok(self)
    }
}

impl<S: ByteSource> AbstractAssert for ByteSourceAssert<S> {
    type Actual = S;

    fn actual(&self) -> Option<&S> {
        self.actual.as_ref()
    }

    fn info(&self) -> &AssertionInfo {
        &self.info
    }

    fn info_mut(&mut self) -> &mut AssertionInfo {
        &mut self.info
    }

    fn failures(&self) -> &Failures {
        &self.failures
    }
}
