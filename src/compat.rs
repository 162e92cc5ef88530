//! Pattern compatibility resolution.
//!
//! A pattern is scanned character by character and each classifying
//! character narrows the set of [`TemporalKind`]s the pattern can render.
//! Characters only ever remove kinds, so the empty pattern resolves to all
//! four and longer patterns never resolve to more.

use bitflags::bitflags;

use crate::TemporalKind;

mod icu;
mod native;

pub use icu::{classify_icu, resolve_icu_pattern};
pub use native::{classify_native, resolve_native_format};

bitflags! {
    /// `TemporalKinds` is a set of [`TemporalKind`]s.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TemporalKinds: u8 {
        /// Represents a date value
        const DATE = 0b0001;
        /// Represents a time value
        const TIME = 0b0010;
        /// Represents a date-time value
        const DATE_TIME = 0b0100;
        /// Represents a zoned date-time value
        const ZONED = 0b1000;
        /// Represents every value shape
        const ALL = Self::DATE.bits() | Self::TIME.bits() | Self::DATE_TIME.bits() | Self::ZONED.bits();
    }
}

impl TemporalKinds {
    /// Returns whether `kind` is a member of this set.
    #[inline]
    pub fn contains_kind(self, kind: TemporalKind) -> bool {
        self.contains(Self::from(kind))
    }

    /// Iterates over the member kinds in declaration order.
    pub fn kinds(self) -> impl Iterator<Item = TemporalKind> {
        TemporalKind::ALL
            .into_iter()
            .filter(move |kind| self.contains_kind(*kind))
    }

    /// Removes the kinds that cannot render a character of `class`.
    #[inline]
    #[must_use]
    pub fn eliminate(self, class: CharClass) -> Self {
        self.difference(class.excluded())
    }
}

impl Default for TemporalKinds {
    fn default() -> Self {
        Self::ALL
    }
}

impl From<TemporalKind> for TemporalKinds {
    fn from(value: TemporalKind) -> Self {
        match value {
            TemporalKind::Date => Self::DATE,
            TemporalKind::Time => Self::TIME,
            TemporalKind::DateTime => Self::DATE_TIME,
            TemporalKind::Zoned => Self::ZONED,
        }
    }
}

/// The class of a pattern character that constrains the value shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// A calendar field; excludes time values.
    Date,
    /// A clock field; excludes date values.
    Time,
    /// A zone field; only zoned values carry one.
    Zone,
}

impl CharClass {
    /// Returns the kinds a character of this class rules out.
    pub const fn excluded(self) -> TemporalKinds {
        match self {
            Self::Date => TemporalKinds::TIME,
            Self::Time => TemporalKinds::DATE,
            Self::Zone => TemporalKinds::DATE
                .union(TemporalKinds::TIME)
                .union(TemporalKinds::DATE_TIME),
        }
    }
}

/// Narrows [`TemporalKinds::ALL`] by every classified character.
pub(crate) fn narrow(classes: impl Iterator<Item = CharClass>) -> TemporalKinds {
    classes.fold(TemporalKinds::ALL, TemporalKinds::eliminate)
}
