//! A renderer for native calendar format strings.
//!
//! Every letter with a meaning renders one field; a backslash escapes the
//! character that follows it and any other character is copied as is.

use alloc::string::String;

use icu_locale::Locale;
use jiff::tz::TimeZone;
use writeable::Writeable;

use super::{
    names::{day_period, month_name, ordinal_suffix, weekday_name, NameWidth},
    write::{FormattedDateTime, OffsetNotation, Piece},
    DateTimeView, RenderEngine,
};
use crate::{utils::swatch_beat, FormatError, FormatResult, TemporalValue};

const ISO_8601: &str = "Y-m-d\\TH:i:sP";
const RFC_2822: &str = "D, d M Y H:i:s O";

/// The built-in native calendar format engine.
///
/// The locale is ignored; names are always English.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeFormatEngine;

impl NativeFormatEngine {
    /// Creates a new `NativeFormatEngine`.
    #[inline]
    pub const fn new() -> Self {
        Self
    }
}

impl RenderEngine for NativeFormatEngine {
    fn render(
        &self,
        format: &str,
        _locale: Option<&Locale>,
        zone: &TimeZone,
        value: &TemporalValue,
    ) -> FormatResult<String> {
        let view = DateTimeView::new(value, zone);
        let formatted = format_view(format, &view)?;
        Ok(formatted.write_to_string().into_owned())
    }
}

fn format_view(format: &str, view: &DateTimeView) -> FormatResult<FormattedDateTime> {
    let mut formatted = FormattedDateTime::default();
    let mut chars = format.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                formatted.push(Piece::Char(escaped));
            }
            continue;
        }
        match c {
            'c' => formatted.extend(format_view(ISO_8601, view)?),
            'r' => formatted.extend(format_view(RFC_2822, view)?),
            _ => formatted.push(resolve(c, view)?),
        }
    }
    Ok(formatted)
}

fn number(value: impl Into<i64>, width: usize) -> Piece {
    Piece::Number {
        value: value.into(),
        width,
    }
}

fn flag(value: bool) -> Piece {
    Piece::Text(if value { "1" } else { "0" })
}

fn resolve(c: char, view: &DateTimeView) -> FormatResult<Piece> {
    let piece = match c {
        'd' | 'j' | 'S' | 'D' | 'l' | 'N' | 'w' | 'z' | 'W' | 'o' | 'F' | 'm' | 'M' | 'n'
        | 't' | 'L' | 'Y' | 'y' => {
            let date = view.require_date(c)?;
            match c {
                'd' => number(date.day(), 2),
                'j' => number(date.day(), 1),
                'S' => Piece::Text(ordinal_suffix(date.day())),
                'D' => Piece::Text(weekday_name(date.weekday(), NameWidth::Abbreviated)),
                'l' => Piece::Text(weekday_name(date.weekday(), NameWidth::Wide)),
                'N' => number(date.weekday().to_monday_one_offset(), 1),
                'w' => number(date.weekday().to_sunday_zero_offset(), 1),
                'z' => number(date.day_of_year() - 1, 1),
                'W' => number(date.iso_week_date().week(), 2),
                'o' => number(date.iso_week_date().year(), 1),
                'F' => Piece::Text(month_name(date.month(), NameWidth::Wide)),
                'm' => number(date.month(), 2),
                'M' => Piece::Text(month_name(date.month(), NameWidth::Abbreviated)),
                'n' => number(date.month(), 1),
                't' => number(date.days_in_month(), 1),
                'L' => flag(date.in_leap_year()),
                'Y' => number(date.year(), 4),
                'y' => Piece::TwoDigit(i64::from(date.year())),
                _ => return Err(FormatError::assert()),
            }
        }
        'a' | 'A' | 'g' | 'G' | 'h' | 'H' | 'B' | 'i' | 's' | 'v' | 'u' => {
            let time = view.require_time(c)?;
            let hour = time.hour();
            let hour12 = if hour % 12 == 0 { 12 } else { hour % 12 };
            match c {
                'a' => Piece::Text(day_period(hour, false)),
                'A' => Piece::Text(day_period(hour, true)),
                'g' => number(hour12, 1),
                'G' => number(hour, 1),
                'h' => number(hour12, 2),
                'H' => number(hour, 2),
                'B' => {
                    let offset = view.zone.as_ref().map_or(0, |zone| zone.offset_seconds);
                    number(swatch_beat(time, offset), 3)
                }
                'i' => number(time.minute(), 2),
                's' => number(time.second(), 2),
                'v' => Piece::Fraction {
                    nanosecond: time.subsec_nanosecond() as u32,
                    precision: 3,
                },
                'u' => Piece::Fraction {
                    nanosecond: time.subsec_nanosecond() as u32,
                    precision: 6,
                },
                _ => return Err(FormatError::assert()),
            }
        }
        'e' | 'T' | 'I' | 'O' | 'P' | 'p' | 'Z' | 'U' => {
            let zone = view.require_zone(c)?;
            let seconds = zone.offset_seconds;
            match c {
                'e' => Piece::Owned(zone.identifier.clone()),
                'T' if zone.abbreviation.is_empty() => Piece::Offset {
                    seconds,
                    notation: OffsetNotation::Extended,
                },
                'T' => Piece::Owned(zone.abbreviation.clone()),
                'I' => flag(zone.is_dst),
                'O' => Piece::Offset {
                    seconds,
                    notation: OffsetNotation::Basic,
                },
                'p' if seconds == 0 => Piece::Char('Z'),
                'P' | 'p' => Piece::Offset {
                    seconds,
                    notation: OffsetNotation::Extended,
                },
                'Z' => number(seconds, 1),
                'U' => {
                    let epoch = zone.epoch_seconds.ok_or_else(|| {
                        FormatError::range().with_message(
                            "format character 'U' requires an instant the value does not carry",
                        )
                    })?;
                    number(epoch, 1)
                }
                _ => return Err(FormatError::assert()),
            }
        }
        other => Piece::Char(other),
    };
    Ok(piece)
}
