//! Per-assertion bookkeeping.

/// Metadata collected while building an assertion chain.
///
/// Set through [`AbstractAssert::described_as`](super::AbstractAssert::described_as)
/// and [`AbstractAssert::with_fail_message`](super::AbstractAssert::with_fail_message).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssertionInfo {
    description: Option<String>,
    overriding_error_message: Option<String>,
}

impl AssertionInfo {
    /// Creates empty assertion info.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the description, if one was set.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Sets the description shown in front of failure messages.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    /// Returns the message replacing generated failure messages, if one was set.
    #[must_use]
    pub fn overriding_error_message(&self) -> Option<&str> {
        self.overriding_error_message.as_deref()
    }

    /// Replaces generated failure messages with `message`.
    pub fn set_overriding_error_message(&mut self, message: impl Into<String>) {
        self.overriding_error_message = Some(message.into());
    }

    /// Returns `"[description] "`, or an empty string when no description is set.
    #[must_use]
    pub fn description_prefix(&self) -> String {
        match self.description.as_deref() {
            Some(description) if !description.is_empty() => format!("[{description}] "),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_prefix() {
        let info = AssertionInfo::new();
        assert_eq!(info.description(), None);
        assert_eq!(info.description_prefix(), "");
    }

    #[test]
    fn test_description_prefix() {
        let mut info = AssertionInfo::new();
        info.set_description("payload");
        assert_eq!(info.description_prefix(), "[payload] ");

        info.set_description("");
        assert_eq!(info.description_prefix(), "");
    }

    #[test]
    fn test_overriding_message() {
        let mut info = AssertionInfo::new();
        info.set_overriding_error_message("boom");
        assert_eq!(info.overriding_error_message(), Some("boom"));
    }
}
