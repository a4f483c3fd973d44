//! Fluent assertions for byte sources.
//!
//! This module provides the assertion surface of testkit-bytes:
//!
//! - [`assert_that`] - Start an assertion chain on a [`ByteSource`]
//! - [`assert_that_option`] - Start a chain on a subject that may be missing
//! - [`ByteSourceAssert`] - Content, emptiness and size checks
//! - [`AbstractAssert`] - Descriptions, message overrides and null checks
//! - [`Failures`] / [`ErrorMessageFactory`] - How failures are built and raised
//!
//! Failed checks panic, failing the enclosing test. Checks that read the
//! subject hand I/O errors back through [`Result`](crate::Result).
//!
//! # Example
//!
//! ```rust
//! use testkit_bytes::prelude::*;
//!
//! # fn main() -> testkit_bytes::Result<()> {
//! let actual = source::wrap(vec![0u8; 9]);
//!
//! assert_that(&actual)
//!     .described_as("padding")
//!     .has_size(9)?
//!     .has_same_content_as(&source::wrap(vec![0u8; 9]))?;
//!
//! assert_that(source::empty()).is_empty()?;
//! # Ok(())
//! # }
//! ```

mod base;
mod byte_source;
mod failures;
mod info;
mod messages;

pub use base::AbstractAssert;
pub use byte_source::ByteSourceAssert;
pub use failures::{AssertionError, Failures};
pub use info::AssertionInfo;
pub use messages::{
    ErrorMessageFactory, ShouldBeEmpty, ShouldBeEqual, ShouldBeNull, ShouldHaveSize,
    ShouldNotBeNull,
};

use crate::source::ByteSource;

/// Default for [`Configuration::max_single_line_length`].
pub const DEFAULT_MAX_SINGLE_LINE_LENGTH: usize = 80;

/// Configuration for how failure messages are rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// Comparisons whose two renderings together fit in this many characters
    /// are reported on a single line.
    pub max_single_line_length: usize,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            max_single_line_length: DEFAULT_MAX_SINGLE_LINE_LENGTH,
        }
    }
}

impl Configuration {
    /// Create a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the single-line length limit.
    #[must_use]
    pub fn max_single_line_length(mut self, length: usize) -> Self {
        self.max_single_line_length = length;
        self
    }

    /// Always report comparisons over multiple lines.
    #[must_use]
    pub fn multiline(self) -> Self {
        self.max_single_line_length(0)
    }
}

/// Create an assertion chain on `actual`.
///
/// Any [`ByteSource`] works, including references, so the subject can be
/// kept for later use.
///
/// ```rust
/// use testkit_bytes::prelude::*;
///
/// # fn main() -> testkit_bytes::Result<()> {
/// let actual = source::wrap(vec![1]);
/// assert_that(&actual).has_size(1)?;
/// assert_eq!(actual.size()?, 1);
/// # Ok(())
/// # }
/// ```
pub fn assert_that<S: ByteSource>(actual: S) -> ByteSourceAssert<S> {
    ByteSourceAssert::new(Some(actual))
}

/// Create an assertion chain on a subject that may be missing.
///
/// Every check on a missing subject fails with
/// "Expecting actual not to be null" before looking at its arguments.
///
/// ```rust
/// use testkit_bytes::prelude::*;
///
/// assert_that_option(None::<WrappedBytes>).is_null();
/// ```
pub fn assert_that_option<S: ByteSource>(actual: Option<S>) -> ByteSourceAssert<S> {
    ByteSourceAssert::new(actual)
}
