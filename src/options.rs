//! Native implementation of the formatter options.
//!
//! The ICU formatter can be configured with a locale and with a date and
//! time strength that stand in for an explicit pattern.

use core::{fmt, str::FromStr};

use icu_locale::Locale;

use crate::FormatError;

// ==== IcuFormatterOptions ====

/// Options for building an [`IcuFormatter`](crate::IcuFormatter).
#[non_exhaustive]
#[derive(Debug, Default, Clone)]
pub struct IcuFormatterOptions {
    /// The requested locale. `None` resolves to the engine's default locale.
    pub locale: Option<Locale>,
    /// The strength of the date portion.
    pub date_style: FormatStrength,
    /// The strength of the time portion.
    pub time_style: FormatStrength,
}

impl IcuFormatterOptions {
    /// Sets the requested locale.
    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Sets the date strength.
    #[must_use]
    pub fn with_date_style(mut self, style: FormatStrength) -> Self {
        self.date_style = style;
        self
    }

    /// Sets the time strength.
    #[must_use]
    pub fn with_time_style(mut self, style: FormatStrength) -> Self {
        self.time_style = style;
        self
    }
}

// ==== FormatStrength ====

/// The locale aware strength of a date or time rendering.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormatStrength {
    /// The portion is not rendered.
    #[default]
    None,
    /// Numeric, e.g. `3/9/24` or `9:05 AM`
    Short,
    /// Abbreviated, e.g. `Mar 9, 2024` or `9:05:00 AM`
    Medium,
    /// Long, e.g. `March 9, 2024` or `9:05:00 AM EST`
    Long,
    /// Full, e.g. `Saturday, March 9, 2024` or `9:05:00 AM Eastern Standard Time`
    Full,
}

impl FormatStrength {
    /// Returns whether this strength renders anything.
    #[inline]
    pub const fn is_some(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Returns whether a time rendered at this strength displays a zone name.
    #[inline]
    pub const fn requires_zone(self) -> bool {
        matches!(self, Self::Long | Self::Full)
    }
}

/// A parsing error for `FormatStrength`.
#[derive(Debug, Clone, Copy)]
pub struct ParseFormatStrengthError;

impl fmt::Display for ParseFormatStrengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("provided string was not a valid format strength value")
    }
}

impl From<ParseFormatStrengthError> for FormatError {
    fn from(_: ParseFormatStrengthError) -> Self {
        FormatError::range().with_message("format strength not an accepted value.")
    }
}

impl FromStr for FormatStrength {
    type Err = ParseFormatStrengthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "short" => Ok(Self::Short),
            "medium" => Ok(Self::Medium),
            "long" => Ok(Self::Long),
            "full" => Ok(Self::Full),
            _ => Err(ParseFormatStrengthError),
        }
    }
}

impl fmt::Display for FormatStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => "none",
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
            Self::Full => "full",
        }
        .fmt(f)
    }
}
