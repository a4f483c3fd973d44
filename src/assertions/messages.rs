//! Failure message factories.
//!
//! Each factory captures the values involved in a failed check, rendered with
//! [`Debug`], and turns them into the message raised by
//! [`Failures`](super::Failures).

use std::fmt::Debug;

use super::{AssertionInfo, Configuration};

/// Builds the message for one kind of failed check.
pub trait ErrorMessageFactory {
    /// Creates the failure message, prefixed by the assertion's description.
    fn create(&self, info: &AssertionInfo, configuration: &Configuration) -> String;

    /// The rendered actual value reported by this failure, if any.
    fn actual(&self) -> Option<&str> {
        None
    }

    /// The rendered expected value reported by this failure, if any.
    fn expected(&self) -> Option<&str> {
        None
    }
}

/// Two values were expected to be equal but are not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShouldBeEqual {
    actual: String,
    expected: String,
}

impl ShouldBeEqual {
    /// Captures both sides of the comparison.
    #[must_use]
    pub fn new(actual: &dyn Debug, expected: &dyn Debug) -> Self {
        Self {
            actual: format!("{actual:?}"),
            expected: format!("{expected:?}"),
        }
    }
}

impl ErrorMessageFactory for ShouldBeEqual {
    fn create(&self, info: &AssertionInfo, configuration: &Configuration) -> String {
        let prefix = info.description_prefix();
        let single_line = self.actual.chars().count() + self.expected.chars().count()
            <= configuration.max_single_line_length
            && !self.actual.contains('\n')
            && !self.expected.contains('\n');

        let mut message = if single_line {
            format!("{prefix}expected:<{}> but was:<{}>", self.expected, self.actual)
        } else {
            format!("{prefix}\nexpected: {}\n but was: {}", self.expected, self.actual)
        };
        if self.actual == self.expected {
            message.push_str("\n(values differ although they render the same)");
        }
        message
    }

    fn actual(&self) -> Option<&str> {
        Some(&self.actual)
    }

    fn expected(&self) -> Option<&str> {
        Some(&self.expected)
    }
}

/// A value was expected to be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShouldBeEmpty {
    actual: String,
}

impl ShouldBeEmpty {
    /// Captures the non-empty value.
    #[must_use]
    pub fn new(actual: &dyn Debug) -> Self {
        Self {
            actual: format!("{actual:?}"),
        }
    }
}

impl ErrorMessageFactory for ShouldBeEmpty {
    fn create(&self, info: &AssertionInfo, _configuration: &Configuration) -> String {
        format!(
            "{}\nExpecting empty but was: {}",
            info.description_prefix(),
            self.actual
        )
    }

    fn actual(&self) -> Option<&str> {
        Some(&self.actual)
    }
}

/// A value was expected to have a different size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShouldHaveSize {
    actual: String,
    actual_size: String,
    expected_size: String,
}

impl ShouldHaveSize {
    /// Captures the value along with its actual and expected sizes.
    #[must_use]
    pub fn new(actual: &dyn Debug, actual_size: u64, expected_size: u64) -> Self {
        Self {
            actual: format!("{actual:?}"),
            actual_size: actual_size.to_string(),
            expected_size: expected_size.to_string(),
        }
    }
}

impl ErrorMessageFactory for ShouldHaveSize {
    fn create(&self, info: &AssertionInfo, _configuration: &Configuration) -> String {
        format!(
            "{}\nExpected size: {} but was: {} in:\n{}",
            info.description_prefix(),
            self.expected_size,
            self.actual_size,
            self.actual
        )
    }

    fn actual(&self) -> Option<&str> {
        Some(&self.actual_size)
    }

    fn expected(&self) -> Option<&str> {
        Some(&self.expected_size)
    }
}

/// The subject of an assertion was missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShouldNotBeNull;

impl ErrorMessageFactory for ShouldNotBeNull {
    fn create(&self, info: &AssertionInfo, _configuration: &Configuration) -> String {
        format!("{}\nExpecting actual not to be null", info.description_prefix())
    }
}

/// The subject of an assertion was expected to be missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShouldBeNull {
    actual: String,
}

impl ShouldBeNull {
    /// Captures the value that is present.
    #[must_use]
    pub fn new(actual: &dyn Debug) -> Self {
        Self {
            actual: format!("{actual:?}"),
        }
    }
}

impl ErrorMessageFactory for ShouldBeNull {
    fn create(&self, info: &AssertionInfo, _configuration: &Configuration) -> String {
        format!(
            "{}\nExpecting actual to be null but was: {}",
            info.description_prefix(),
            self.actual
        )
    }

    fn actual(&self) -> Option<&str> {
        Some(&self.actual)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source;
    use pretty_assertions::assert_eq;

    fn described(description: &str) -> AssertionInfo {
        let mut info = AssertionInfo::new();
        info.set_description(description);
        info
    }

    #[test]
    fn test_should_be_equal_single_line() {
        let factory = ShouldBeEqual::new(&source::wrap(vec![1]), &source::wrap(vec![2]));
        let message = factory.create(&AssertionInfo::new(), &Configuration::default());
        assert_eq!(message, "expected:<wrap(02)> but was:<wrap(01)>");
        assert_eq!(factory.actual(), Some("wrap(01)"));
        assert_eq!(factory.expected(), Some("wrap(02)"));
    }

    #[test]
    fn test_should_be_equal_multiline() {
        let factory = ShouldBeEqual::new(&source::wrap(vec![1]), &source::wrap(vec![2]));
        let message = factory.create(&described("body"), &Configuration::new().multiline());
        assert_eq!(message, "[body] \nexpected: wrap(02)\n but was: wrap(01)");
    }

    /// Renders across two lines.
    struct Framed;

    impl Debug for Framed {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("head\ntail")
        }
    }

    #[test]
    fn test_should_be_equal_newline_forces_multiline() {
        let factory = ShouldBeEqual::new(&Framed, &source::wrap(vec![2]));
        let message = factory.create(&AssertionInfo::new(), &Configuration::default());
        assert_eq!(message, "\nexpected: wrap(02)\n but was: head\ntail");

        let factory = ShouldBeEqual::new(&source::wrap(vec![2]), &Framed);
        let message = factory.create(&AssertionInfo::new(), &Configuration::default());
        assert_eq!(message, "\nexpected: head\ntail\n but was: wrap(02)");
    }

    #[test]
    fn test_should_be_equal_length_limit_boundary() {
        // "wrap(01)" and "wrap(02)" add up to 16 characters.
        let factory = ShouldBeEqual::new(&source::wrap(vec![1]), &source::wrap(vec![2]));
        let info = AssertionInfo::new();

        let at_limit = factory.create(&info, &Configuration::new().max_single_line_length(16));
        assert_eq!(at_limit, "expected:<wrap(02)> but was:<wrap(01)>");

        let below_limit = factory.create(&info, &Configuration::new().max_single_line_length(15));
        assert_eq!(below_limit, "\nexpected: wrap(02)\n but was: wrap(01)");
    }

    #[test]
    fn test_should_be_equal_counts_characters() {
        let path = crate::source::FileSource::new("dé.bin");
        let factory = ShouldBeEqual::new(&path, &path);
        let rendered = format!("{path:?}");
        let chars = rendered.chars().count();
        assert!(rendered.len() > chars);

        let message = factory.create(
            &AssertionInfo::new(),
            &Configuration::new().max_single_line_length(chars * 2),
        );
        assert!(message.starts_with("expected:<FileSource"), "{message}");
    }

    #[test]
    fn test_should_be_equal_identical_renderings() {
        let factory = ShouldBeEqual::new(&source::wrap(vec![0; 20]), &source::wrap(vec![0; 21]));
        let message = factory.create(&AssertionInfo::new(), &Configuration::default());
        assert!(message.ends_with("\n(values differ although they render the same)"));
    }

    #[test]
    fn test_should_be_empty() {
        let factory = ShouldBeEmpty::new(&source::wrap(vec![0xff]));
        let message = factory.create(&AssertionInfo::new(), &Configuration::default());
        assert_eq!(message, "\nExpecting empty but was: wrap(ff)");
        assert_eq!(factory.expected(), None);
    }

    #[test]
    fn test_should_have_size() {
        let factory = ShouldHaveSize::new(&source::wrap(vec![0]), 1, 0);
        let message = factory.create(&described("frame"), &Configuration::default());
        assert_eq!(message, "[frame] \nExpected size: 0 but was: 1 in:\nwrap(00)");
        assert_eq!(factory.actual(), Some("1"));
        assert_eq!(factory.expected(), Some("0"));
    }

    #[test]
    fn test_null_messages() {
        let info = AssertionInfo::new();
        let configuration = Configuration::default();
        assert_eq!(
            ShouldNotBeNull.create(&info, &configuration),
            "\nExpecting actual not to be null"
        );
        assert_eq!(
            ShouldBeNull::new(&source::empty()).create(&info, &configuration),
            "\nExpecting actual to be null but was: wrap()"
        );
    }
}
