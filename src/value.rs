//! The closed set of temporal value shapes a pattern can render.

use alloc::{format, string::String};
use core::fmt;

use jiff::{
    civil::{Date, DateTime, Time},
    tz::TimeZone,
    Zoned,
};

use crate::{Sign, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

/// The tag of a [`TemporalValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TemporalKind {
    /// A calendar date with no time of day.
    Date,
    /// A wall-clock time with no date.
    Time,
    /// A date paired with a time, with no zone.
    DateTime,
    /// A date and time in a time zone.
    Zoned,
}

impl TemporalKind {
    /// All four kinds, in declaration order.
    pub const ALL: [TemporalKind; 4] = [Self::Date, Self::Time, Self::DateTime, Self::Zoned];

    /// Returns the name of this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Time => "time",
            Self::DateTime => "date-time",
            Self::Zoned => "zoned-date-time",
        }
    }
}

impl fmt::Display for TemporalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

/// A temporal value in one of four shapes.
///
/// The shape is fixed at construction; every site that inspects it matches
/// exhaustively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemporalValue {
    Date(Date),
    Time(Time),
    DateTime(DateTime),
    Zoned(Zoned),
}

impl TemporalValue {
    /// Returns the tag of this value.
    pub fn kind(&self) -> TemporalKind {
        match self {
            Self::Date(_) => TemporalKind::Date,
            Self::Time(_) => TemporalKind::Time,
            Self::DateTime(_) => TemporalKind::DateTime,
            Self::Zoned(_) => TemporalKind::Zoned,
        }
    }

    /// Returns the date component, if this value carries one.
    pub fn date(&self) -> Option<Date> {
        match self {
            Self::Date(date) => Some(*date),
            Self::Time(_) => None,
            Self::DateTime(dt) => Some(dt.date()),
            Self::Zoned(zdt) => Some(zdt.date()),
        }
    }

    /// Returns the time component, if this value carries one.
    pub fn time(&self) -> Option<Time> {
        match self {
            Self::Date(_) => None,
            Self::Time(time) => Some(*time),
            Self::DateTime(dt) => Some(dt.time()),
            Self::Zoned(zdt) => Some(zdt.time()),
        }
    }

    /// Returns the time zone, if this value carries one.
    pub fn time_zone(&self) -> Option<&TimeZone> {
        match self {
            Self::Zoned(zdt) => Some(zdt.time_zone()),
            Self::Date(_) | Self::Time(_) | Self::DateTime(_) => None,
        }
    }

    /// Returns the UTC offset in seconds, if this value carries a zone.
    pub fn zone_offset_seconds(&self) -> Option<i32> {
        match self {
            Self::Zoned(zdt) => Some(zdt.offset().seconds()),
            Self::Date(_) | Self::Time(_) | Self::DateTime(_) => None,
        }
    }

    /// Returns the zone identifier, if this value carries a zone.
    ///
    /// This is the IANA name when the zone has one, and a `±HH:MM` marker
    /// for fixed offset zones.
    pub fn zone_identifier(&self) -> Option<String> {
        match self {
            Self::Zoned(zdt) => Some(zone_identifier(zdt.time_zone(), zdt.offset().seconds())),
            Self::Date(_) | Self::Time(_) | Self::DateTime(_) => None,
        }
    }
}

/// Returns the identifier of `zone`, falling back to a fixed offset marker.
pub(crate) fn zone_identifier(zone: &TimeZone, offset_seconds: i32) -> String {
    match zone.iana_name() {
        Some(name) => String::from(name),
        None => fixed_offset_marker(offset_seconds),
    }
}

/// Formats a fixed offset as `±HH:MM`, with a trailing `:SS` when needed.
pub(crate) fn fixed_offset_marker(offset_seconds: i32) -> String {
    let sign = Sign::from(offset_seconds).as_char();
    let abs = offset_seconds.unsigned_abs() as i32;
    let hours = abs / SECONDS_PER_HOUR;
    let minutes = (abs % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let seconds = abs % SECONDS_PER_MINUTE;
    if seconds == 0 {
        format!("{sign}{hours:02}:{minutes:02}")
    } else {
        format!("{sign}{hours:02}:{minutes:02}:{seconds:02}")
    }
}

impl From<Date> for TemporalValue {
    fn from(value: Date) -> Self {
        Self::Date(value)
    }
}

impl From<Time> for TemporalValue {
    fn from(value: Time) -> Self {
        Self::Time(value)
    }
}

impl From<DateTime> for TemporalValue {
    fn from(value: DateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<Zoned> for TemporalValue {
    fn from(value: Zoned) -> Self {
        Self::Zoned(value)
    }
}
