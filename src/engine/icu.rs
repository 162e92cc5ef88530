//! A renderer for ICU style date/time patterns.
//!
//! Runs of the same ASCII letter are pattern fields; text between single
//! quotes is literal and `''` writes a single quote. Every other character
//! is copied as is.

use alloc::{format, string::String, vec::Vec};

use icu_locale::Locale;
use jiff::tz::TimeZone;
use writeable::Writeable;

use super::{
    names::{day_period, era_name, month_name, quarter_name, weekday_name, NameWidth},
    write::{FormattedDateTime, OffsetNotation, Piece},
    DateTimeView, RenderEngine, ZoneView,
};
use crate::{
    utils::{milliseconds_in_day, modified_julian_day},
    FormatError, FormatResult, TemporalValue,
};

/// The built-in ICU pattern engine.
///
/// Display names are English; a locale of another language can only render
/// numeric fields.
#[derive(Debug, Default, Clone, Copy)]
pub struct IcuPatternEngine;

impl IcuPatternEngine {
    /// Creates a new `IcuPatternEngine`.
    #[inline]
    pub const fn new() -> Self {
        Self
    }
}

impl RenderEngine for IcuPatternEngine {
    fn render(
        &self,
        pattern: &str,
        locale: Option<&Locale>,
        zone: &TimeZone,
        value: &TemporalValue,
    ) -> FormatResult<String> {
        let items = parse_pattern(pattern)?;
        let view = DateTimeView::new(value, zone);
        let names = locale.map_or(true, |locale| {
            matches!(locale.id.language.as_str(), "en" | "und")
        });

        let mut formatted = FormattedDateTime::default();
        for item in items {
            match item {
                PatternItem::Literal(text) => formatted.push_str(&text),
                PatternItem::Field { symbol, count } => {
                    let field = FieldRenderer {
                        view: &view,
                        names,
                        symbol,
                        count,
                    };
                    formatted.push(field.resolve()?);
                }
            }
        }
        Ok(formatted.write_to_string().into_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PatternItem {
    Literal(String),
    Field { symbol: char, count: usize },
}

fn parse_pattern(pattern: &str) -> FormatResult<Vec<PatternItem>> {
    let mut items = Vec::new();
    let mut literal = String::new();
    let mut quoted = false;
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\'' {
            if chars.peek() == Some(&'\'') {
                chars.next();
                literal.push('\'');
            } else {
                quoted = !quoted;
            }
            continue;
        }
        if quoted || !c.is_ascii_alphabetic() {
            literal.push(c);
            continue;
        }
        let mut count = 1;
        while chars.peek() == Some(&c) {
            chars.next();
            count += 1;
        }
        if !literal.is_empty() {
            items.push(PatternItem::Literal(core::mem::take(&mut literal)));
        }
        items.push(PatternItem::Field { symbol: c, count });
    }

    if quoted {
        return Err(FormatError::syntax()
            .with_message(format!("unterminated quote in pattern \"{pattern}\"")));
    }
    if !literal.is_empty() {
        items.push(PatternItem::Literal(literal));
    }
    Ok(items)
}

struct FieldRenderer<'a> {
    view: &'a DateTimeView,
    names: bool,
    symbol: char,
    count: usize,
}

impl FieldRenderer<'_> {
    fn resolve(&self) -> FormatResult<Piece> {
        match self.symbol {
            'G' | 'y' | 'Y' | 'u' | 'U' | 'r' | 'Q' | 'q' | 'M' | 'L' | 'w' | 'W' | 'd' | 'D'
            | 'F' | 'g' | 'E' | 'e' | 'c' => self.resolve_date(),
            'a' | 'h' | 'H' | 'k' | 'K' | 'm' | 's' | 'S' | 'A' => self.resolve_time(),
            'z' | 'Z' | 'O' | 'v' | 'V' | 'X' | 'x' => {
                self.resolve_zone(self.view.require_zone(self.symbol)?)
            }
            symbol => Err(FormatError::syntax()
                .with_message(format!("unsupported pattern field '{symbol}'"))),
        }
    }

    fn number(&self, value: impl Into<i64>) -> Piece {
        Piece::Number {
            value: value.into(),
            width: self.count,
        }
    }

    fn text(&self, text: &'static str) -> FormatResult<Piece> {
        if !self.names {
            return Err(FormatError::range().with_message(format!(
                "no display names for pattern field '{}' in this locale",
                self.symbol
            )));
        }
        Ok(Piece::Text(text))
    }

    fn year(&self, year: i64) -> Piece {
        if self.count == 2 {
            Piece::TwoDigit(year)
        } else {
            self.number(year)
        }
    }

    fn resolve_date(&self) -> FormatResult<Piece> {
        let date = self.view.require_date(self.symbol)?;
        let width = NameWidth::from_count(self.count);
        let year = i64::from(date.year());
        let era_year = if year <= 0 { 1 - year } else { year };
        match self.symbol {
            'G' => self.text(era_name(date.year(), width)),
            'y' | 'U' => Ok(self.year(era_year)),
            'Y' => Ok(self.year(i64::from(date.iso_week_date().year()))),
            'u' | 'r' => Ok(self.number(year)),
            'Q' | 'q' => {
                let quarter = (date.month() - 1) / 3 + 1;
                match self.count {
                    1 | 2 => Ok(self.number(quarter)),
                    _ => self.text(quarter_name(quarter, width)),
                }
            }
            'M' | 'L' => match self.count {
                1 | 2 => Ok(self.number(date.month())),
                _ => self.text(month_name(date.month(), width)),
            },
            'w' => Ok(self.number(date.iso_week_date().week())),
            'W' => {
                let first = date.first_of_month().weekday().to_monday_zero_offset();
                Ok(self.number((date.day() - 1 + first) / 7 + 1))
            }
            'd' => Ok(self.number(date.day())),
            'D' => Ok(self.number(date.day_of_year())),
            'F' => Ok(self.number((date.day() - 1) / 7 + 1)),
            'g' => Ok(self.number(modified_julian_day(date))),
            'e' | 'c' if self.count <= 2 => Ok(self.number(date.weekday().to_sunday_one_offset())),
            'E' | 'e' | 'c' => self.text(weekday_name(date.weekday(), width)),
            _ => Err(FormatError::assert()),
        }
    }

    fn resolve_time(&self) -> FormatResult<Piece> {
        let time = self.view.require_time(self.symbol)?;
        let hour = time.hour();
        match self.symbol {
            'a' => self.text(day_period(hour, true)),
            'h' => Ok(self.number(if hour % 12 == 0 { 12 } else { hour % 12 })),
            'H' => Ok(self.number(hour)),
            'k' => Ok(self.number(if hour == 0 { 24 } else { hour })),
            'K' => Ok(self.number(hour % 12)),
            'm' => Ok(self.number(time.minute())),
            's' => Ok(self.number(time.second())),
            'S' => Ok(Piece::Fraction {
                nanosecond: time.subsec_nanosecond() as u32,
                precision: self.count,
            }),
            'A' => Ok(self.number(milliseconds_in_day(time))),
            _ => Err(FormatError::assert()),
        }
    }

    fn resolve_zone(&self, zone: &ZoneView) -> FormatResult<Piece> {
        let seconds = zone.offset_seconds;
        let gmt = |long| Piece::GmtOffset { seconds, long };
        let iso = |notation, utc_marker: bool| {
            if utc_marker && seconds == 0 {
                Piece::Char('Z')
            } else {
                Piece::Offset { seconds, notation }
            }
        };
        match (self.symbol, self.count) {
            ('z', 1..=3) => Ok(if is_offset_abbreviation(&zone.abbreviation) {
                gmt(false)
            } else {
                Piece::Owned(zone.abbreviation.clone())
            }),
            ('z', _) => Ok(gmt(true)),
            ('Z', 1..=3) => Ok(iso(OffsetNotation::Basic, false)),
            ('Z', 4) => Ok(gmt(true)),
            ('Z', _) => Ok(iso(OffsetNotation::ExtendedOptionalSeconds, true)),
            ('O', 1..=3) => Ok(gmt(false)),
            ('O', _) => Ok(gmt(true)),
            ('v', 1..=3) => Ok(gmt(false)),
            ('v', _) | ('V', 4..) => Ok(match exemplar_city(&zone.identifier) {
                Some(city) => Piece::Owned(format!("{city} Time")),
                None => gmt(true),
            }),
            ('V', 1) => Ok(Piece::Text("unk")),
            ('V', 2) => Ok(Piece::Owned(zone.identifier.clone())),
            ('V', _) => Ok(match exemplar_city(&zone.identifier) {
                Some(city) => Piece::Owned(city),
                None => Piece::Text("Unknown City"),
            }),
            (symbol @ ('X' | 'x'), count) => {
                let notation = match count {
                    1 => OffsetNotation::HoursOptionalMinutes,
                    2 => OffsetNotation::Basic,
                    3 => OffsetNotation::Extended,
                    4 => OffsetNotation::BasicOptionalSeconds,
                    5 => OffsetNotation::ExtendedOptionalSeconds,
                    _ => {
                        return Err(FormatError::syntax().with_message(format!(
                            "pattern field '{symbol}' cannot repeat {count} times"
                        )))
                    }
                };
                Ok(iso(notation, symbol == 'X'))
            }
            _ => Err(FormatError::assert()),
        }
    }
}

fn is_offset_abbreviation(abbreviation: &str) -> bool {
    abbreviation.is_empty() || abbreviation.starts_with(['+', '-'])
}

/// Returns the city of a region identifier such as `America/New_York`.
fn exemplar_city(identifier: &str) -> Option<String> {
    let (_, city) = identifier.rsplit_once('/')?;
    Some(city.replace('_', " "))
}
