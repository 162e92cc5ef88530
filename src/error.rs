//! This module implements `FormatError`.

use alloc::borrow::Cow;
use core::fmt;

/// `FormatError`'s error type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Error.
    #[default]
    Generic,
    /// RangeError: a value lacks a component the operation needs.
    Range,
    /// SyntaxError: a pattern could not be read.
    Syntax,
    /// A strict field lookup found no queued value.
    FieldNotPresent,
    /// A pattern cannot render the runtime kind of a value.
    ///
    /// The message names both, as `pattern "<pattern>" is not compatible with
    /// a <kind> value`, where `<kind>` is the [`TemporalKind`](crate::TemporalKind)
    /// name. A rejection by a long or full time style inserts
    /// `with a <style> time style` after the pattern.
    Incompatible,
    /// No pattern could be resolved for a formatter.
    Unresolvable,
    /// Assertion error
    Assert,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => "Error",
            Self::Range => "RangeError",
            Self::Syntax => "SyntaxError",
            Self::FieldNotPresent => "FieldNotPresentError",
            Self::Incompatible => "FormatIncompatibilityError",
            Self::Unresolvable => "PatternUnresolvableError",
            Self::Assert => "ImplementationError",
        }
        .fmt(f)
    }
}

/// The error type for `temporal_format`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    kind: ErrorKind,
    msg: Cow<'static, str>,
}

impl FormatError {
    #[inline]
    #[must_use]
    fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: Cow::Borrowed(""),
        }
    }

    /// Create a generic error
    #[inline]
    #[must_use]
    pub fn general<S>(msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self::new(ErrorKind::Generic).with_message(msg)
    }

    /// Create a range error.
    #[inline]
    #[must_use]
    pub fn range() -> Self {
        Self::new(ErrorKind::Range)
    }

    /// Create a syntax error.
    #[inline]
    #[must_use]
    pub fn syntax() -> Self {
        Self::new(ErrorKind::Syntax)
    }

    /// Create a field-not-present error.
    #[inline]
    #[must_use]
    pub fn field_not_present() -> Self {
        Self::new(ErrorKind::FieldNotPresent)
    }

    /// Create a format incompatibility error.
    #[inline]
    #[must_use]
    pub fn incompatible() -> Self {
        Self::new(ErrorKind::Incompatible)
    }

    /// Create a pattern unresolvable error.
    #[inline]
    #[must_use]
    pub fn unresolvable() -> Self {
        Self::new(ErrorKind::Unresolvable)
    }

    /// Creates an assertion error
    #[inline]
    #[must_use]
    pub(crate) fn assert() -> Self {
        Self::new(ErrorKind::Assert).with_message("Implementation error: assertion failed.")
    }

    /// Add a message to the error.
    #[inline]
    #[must_use]
    pub fn with_message<S>(mut self, msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.msg = msg.into();
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// Extracts the error message.
    #[inline]
    #[must_use]
    pub fn into_message(self) -> Cow<'static, str> {
        self.msg
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        let msg = self.msg.trim();
        if !msg.is_empty() {
            write!(f, ": {msg}")?;
        }

        Ok(())
    }
}

impl core::error::Error for FormatError {}

#[cfg(test)]
mod tests {
    use super::{ErrorKind, FormatError};
    use alloc::string::ToString;

    #[test]
    fn display_includes_kind_and_message() {
        let err = FormatError::field_not_present().with_message("year is not present");
        assert_eq!(err.kind(), ErrorKind::FieldNotPresent);
        assert_eq!(err.to_string(), "FieldNotPresentError: year is not present");

        let bare = FormatError::range();
        assert_eq!(bare.to_string(), "RangeError");
    }
}
