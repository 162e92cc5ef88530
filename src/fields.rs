//! This module implements the named fields extracted from a `TemporalValue`.

use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use core::{fmt, str::FromStr};

use jiff::civil::{Date, Time};

use crate::{
    value::{zone_identifier, TemporalValue},
    FormatError, Sign, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};

/// The closed vocabulary of field names.
///
/// Variants are declared in extraction order.
#[derive(Debug, Hash, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FieldKey {
    /// Day of the month, 1-31.
    DayOfMonth,
    /// ISO day of the week, Monday = 1 through Sunday = 7.
    DayOfWeek,
    /// Day of the year, 1-366.
    DayOfYear,
    /// ISO week number.
    WeekOfYear,
    /// Month of the year, 1-12.
    MonthOfYear,
    /// Signed ISO year.
    Year,
    /// Hour of the day, 0-23.
    HourOfDay,
    /// Minute of the hour, 0-59.
    MinuteOfHour,
    /// Second of the minute, 0-59.
    SecondOfMinute,
    /// Nanosecond of the second.
    NanoOfSecond,
    /// Fraction of the second, in nanoseconds.
    FractionOfSecond,
    /// Absolute hours of the UTC offset.
    ZoneOffsetHour,
    /// Absolute minutes of the UTC offset, past the hour.
    ZoneOffsetMinute,
    /// `+`, `-`, or `Z` for a zero offset.
    ZoneOffsetSign,
    /// Signed UTC offset in seconds.
    ZoneOffsetTotalSeconds,
    /// Region identifier, or a `±HH:MM` marker for fixed zones.
    ZoneRegion,
}

impl FieldKey {
    /// The fields extracted from a date.
    pub const DATE: [FieldKey; 6] = [
        Self::DayOfMonth,
        Self::DayOfWeek,
        Self::DayOfYear,
        Self::WeekOfYear,
        Self::MonthOfYear,
        Self::Year,
    ];

    /// The fields extracted from a time.
    pub const TIME: [FieldKey; 5] = [
        Self::HourOfDay,
        Self::MinuteOfHour,
        Self::SecondOfMinute,
        Self::NanoOfSecond,
        Self::FractionOfSecond,
    ];

    /// The fields extracted from a zone.
    pub const ZONE: [FieldKey; 5] = [
        Self::ZoneOffsetHour,
        Self::ZoneOffsetMinute,
        Self::ZoneOffsetSign,
        Self::ZoneOffsetTotalSeconds,
        Self::ZoneRegion,
    ];

    /// Returns the field's name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DayOfMonth => "day-of-month",
            Self::DayOfWeek => "day-of-week",
            Self::DayOfYear => "day-of-year",
            Self::WeekOfYear => "week-of-year",
            Self::MonthOfYear => "month-of-year",
            Self::Year => "year",
            Self::HourOfDay => "hour-of-day",
            Self::MinuteOfHour => "minute-of-hour",
            Self::SecondOfMinute => "second-of-minute",
            Self::NanoOfSecond => "nano-of-second",
            Self::FractionOfSecond => "fraction-of-second",
            Self::ZoneOffsetHour => "zone-offset-hour",
            Self::ZoneOffsetMinute => "zone-offset-minute",
            Self::ZoneOffsetSign => "zone-offset-sign",
            Self::ZoneOffsetTotalSeconds => "zone-offset-total-seconds",
            Self::ZoneRegion => "zone-region",
        }
    }

    /// Returns whether this is a date field.
    pub const fn is_date(self) -> bool {
        matches!(
            self,
            Self::DayOfMonth
                | Self::DayOfWeek
                | Self::DayOfYear
                | Self::WeekOfYear
                | Self::MonthOfYear
                | Self::Year
        )
    }

    /// Returns whether this is a time field.
    pub const fn is_time(self) -> bool {
        matches!(
            self,
            Self::HourOfDay
                | Self::MinuteOfHour
                | Self::SecondOfMinute
                | Self::NanoOfSecond
                | Self::FractionOfSecond
        )
    }

    /// Returns whether this is a zone field.
    pub const fn is_zone(self) -> bool {
        !self.is_date() && !self.is_time()
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

impl FromStr for FieldKey {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day-of-month" => Ok(Self::DayOfMonth),
            "day-of-week" => Ok(Self::DayOfWeek),
            "day-of-year" => Ok(Self::DayOfYear),
            "week-of-year" => Ok(Self::WeekOfYear),
            "month-of-year" => Ok(Self::MonthOfYear),
            "year" => Ok(Self::Year),
            "hour-of-day" => Ok(Self::HourOfDay),
            "minute-of-hour" => Ok(Self::MinuteOfHour),
            "second-of-minute" => Ok(Self::SecondOfMinute),
            "nano-of-second" => Ok(Self::NanoOfSecond),
            "fraction-of-second" => Ok(Self::FractionOfSecond),
            "zone-offset-hour" => Ok(Self::ZoneOffsetHour),
            "zone-offset-minute" => Ok(Self::ZoneOffsetMinute),
            "zone-offset-sign" => Ok(Self::ZoneOffsetSign),
            "zone-offset-total-seconds" => Ok(Self::ZoneOffsetTotalSeconds),
            "zone-region" => Ok(Self::ZoneRegion),
            _ => Err(FormatError::general("String cannot be converted to FieldKey")),
        }
    }
}

/// Extracts every field of `value`, in extraction order.
///
/// A date yields the 6 date fields, a time the 5 time fields, a date-time
/// both, and a zoned date-time all 16.
pub fn extract_fields(value: &TemporalValue) -> Vec<(FieldKey, String)> {
    let mut fields = Vec::with_capacity(16);
    match value {
        TemporalValue::Date(date) => push_date_fields(&mut fields, *date),
        TemporalValue::Time(time) => push_time_fields(&mut fields, *time),
        TemporalValue::DateTime(dt) => {
            push_date_fields(&mut fields, dt.date());
            push_time_fields(&mut fields, dt.time());
        }
        TemporalValue::Zoned(zdt) => {
            push_date_fields(&mut fields, zdt.date());
            push_time_fields(&mut fields, zdt.time());
            let offset = zdt.offset().seconds();
            push_zone_fields(&mut fields, offset, zone_identifier(zdt.time_zone(), offset));
        }
    }
    fields
}

fn push_date_fields(fields: &mut Vec<(FieldKey, String)>, date: Date) {
    fields.push((FieldKey::DayOfMonth, date.day().to_string()));
    fields.push((
        FieldKey::DayOfWeek,
        date.weekday().to_monday_one_offset().to_string(),
    ));
    fields.push((FieldKey::DayOfYear, date.day_of_year().to_string()));
    fields.push((FieldKey::WeekOfYear, date.iso_week_date().week().to_string()));
    fields.push((FieldKey::MonthOfYear, date.month().to_string()));
    fields.push((FieldKey::Year, date.year().to_string()));
}

fn push_time_fields(fields: &mut Vec<(FieldKey, String)>, time: Time) {
    let nanosecond = time.subsec_nanosecond().to_string();
    fields.push((FieldKey::HourOfDay, time.hour().to_string()));
    fields.push((FieldKey::MinuteOfHour, time.minute().to_string()));
    fields.push((FieldKey::SecondOfMinute, time.second().to_string()));
    fields.push((FieldKey::NanoOfSecond, nanosecond.clone()));
    fields.push((FieldKey::FractionOfSecond, nanosecond));
}

fn push_zone_fields(fields: &mut Vec<(FieldKey, String)>, offset_seconds: i32, region: String) {
    let abs = offset_seconds.unsigned_abs() as i32;
    let hours = abs / SECONDS_PER_HOUR;
    let minutes = (abs % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    fields.push((FieldKey::ZoneOffsetHour, hours.to_string()));
    fields.push((FieldKey::ZoneOffsetMinute, minutes.to_string()));
    fields.push((
        FieldKey::ZoneOffsetSign,
        Sign::from(offset_seconds).as_offset_marker().to_string(),
    ));
    fields.push((FieldKey::ZoneOffsetTotalSeconds, offset_seconds.to_string()));
    fields.push((FieldKey::ZoneRegion, region));
}
