//! The `temporal_format` crate decides whether a date/time rendering pattern
//! can legally render a temporal value, and extracts the named fields of
//! that value for downstream renderers.
//!
//! ```rust
//! use temporal_format::{
//!     FormatContext, DateTimeFormatter, IcuFormatter, IcuFormatterOptions, TemporalKinds,
//!     compat::resolve_icu_pattern,
//! };
//! use jiff::civil::date;
//!
//! // Only a value without a date is excluded by a date pattern.
//! let kinds = resolve_icu_pattern("yyyy-MM-dd");
//! assert_eq!(kinds, TemporalKinds::DATE | TemporalKinds::DATE_TIME | TemporalKinds::ZONED);
//!
//! let mut context = FormatContext::from(date(2024, 3, 9));
//! assert_eq!(context.get_optional_field_by_name("month-of-year"), "3");
//!
//! let formatter = IcuFormatter::try_new(IcuFormatterOptions::default(), Some("yyyy-MM-dd")).unwrap();
//! assert_eq!(formatter.format(&context).unwrap(), "2024-03-09");
//! ```
//!
//! The crate is organised leaf first:
//!
//! - [`TemporalValue`]: the closed set of four value shapes.
//! - [`fields`]: extraction of every named field of a value.
//! - [`FormatContext`]: the queue-backed field store built from a value.
//! - [`compat`]: pattern scanners that resolve the [`TemporalKinds`] a
//!   pattern can render.
//! - [`engine`]: the rendering engines the formatters delegate to.
//! - [`formatter`]: the two dispatch strategies tying it all together.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::too_many_lines,
    clippy::missing_errors_doc,

    // It may be worth to look if we can fix the issues highlighted by these lints.
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
)]

extern crate alloc;
extern crate core;

#[cfg(feature = "std")]
extern crate std;

pub mod compat;
pub mod engine;
pub mod error;
pub mod fields;
pub mod formatter;
pub mod options;

mod context;
mod value;

#[doc(hidden)]
pub(crate) mod utils;

use core::cmp::Ordering;

#[doc(inline)]
pub use error::FormatError;

/// The `temporal_format` result type
pub type FormatResult<T> = Result<T, FormatError>;

pub use crate::{
    compat::TemporalKinds,
    context::FormatContext,
    fields::FieldKey,
    formatter::{DateTimeFormatter, IcuFormatter, NativeFormatter},
    options::{FormatStrength, IcuFormatterOptions},
    value::{TemporalKind, TemporalValue},
};

/// Re-export of `Locale` from `icu_locale`.
pub use icu_locale::Locale;

/// The sign of a UTC offset.
#[repr(i8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Sign {
    #[default]
    Positive = 1,
    Zero = 0,
    Negative = -1,
}

impl From<i32> for Sign {
    fn from(value: i32) -> Self {
        match value.cmp(&0) {
            Ordering::Greater => Self::Positive,
            Ordering::Equal => Self::Zero,
            Ordering::Less => Self::Negative,
        }
    }
}

impl Sign {
    /// Returns the offset sign marker: `Z` for zero, otherwise `+` or `-`.
    pub const fn as_offset_marker(self) -> &'static str {
        match self {
            Self::Positive => "+",
            Self::Zero => "Z",
            Self::Negative => "-",
        }
    }

    /// Returns the sign character, treating zero as positive.
    pub(crate) const fn as_char(self) -> char {
        match self {
            Self::Negative => '-',
            _ => '+',
        }
    }
}

// Relevant numeric constants
/// Seconds per hour constant
pub const SECONDS_PER_HOUR: i32 = 3_600;
/// Seconds per minute constant
pub const SECONDS_PER_MINUTE: i32 = 60;
/// Seconds per day constant
pub(crate) const SECONDS_PER_DAY: i64 = 86_400;
