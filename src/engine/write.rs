//! Shared numeric writers for the rendering engines.

use alloc::{string::String, vec::Vec};
use core::fmt::Write;

use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{Sign, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

/// A resolved piece of rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Piece {
    Char(char),
    Text(&'static str),
    Owned(String),
    /// A number padded to `width` digits.
    Number { value: i64, width: usize },
    /// The last two digits of a number.
    TwoDigit(i64),
    /// The leading digits of a nanosecond value.
    Fraction { nanosecond: u32, precision: usize },
    Offset { seconds: i32, notation: OffsetNotation },
    GmtOffset { seconds: i32, long: bool },
}

impl Writeable for Piece {
    fn write_to<W: Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        match self {
            Self::Char(c) => sink.write_char(*c),
            Self::Text(text) => sink.write_str(text),
            Self::Owned(text) => sink.write_str(text),
            Self::Number { value, width } => write_padded(*value, *width, sink),
            Self::TwoDigit(value) => write_two_digit(*value, sink),
            Self::Fraction {
                nanosecond,
                precision,
            } => write_fraction(*nanosecond, *precision, sink),
            Self::Offset { seconds, notation } => write_offset(*seconds, *notation, sink),
            Self::GmtOffset { seconds, long } => write_gmt_offset(*seconds, *long, sink),
        }
    }

    fn writeable_length_hint(&self) -> LengthHint {
        match self {
            Self::Char(c) => LengthHint::exact(c.len_utf8()),
            Self::Text(text) => LengthHint::exact(text.len()),
            Self::Owned(text) => LengthHint::exact(text.len()),
            Self::Number { width, .. } => LengthHint::at_least(*width),
            Self::TwoDigit(_) => LengthHint::exact(2),
            Self::Fraction { precision, .. } => LengthHint::exact(*precision),
            Self::Offset { .. } => LengthHint::between(3, 9),
            Self::GmtOffset { .. } => LengthHint::between(3, 9),
        }
    }
}

/// A rendered date/time, ready to be written.
#[derive(Debug, Clone, Default)]
pub(crate) struct FormattedDateTime {
    pieces: Vec<Piece>,
}

impl FormattedDateTime {
    pub(crate) fn push(&mut self, piece: Piece) {
        self.pieces.push(piece);
    }

    pub(crate) fn push_str(&mut self, text: &str) {
        match self.pieces.last_mut() {
            Some(Piece::Owned(last)) => last.push_str(text),
            _ => self.pieces.push(Piece::Owned(String::from(text))),
        }
    }

    pub(crate) fn extend(&mut self, other: FormattedDateTime) {
        self.pieces.extend(other.pieces);
    }
}

impl Writeable for FormattedDateTime {
    fn write_to<W: Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        for piece in &self.pieces {
            piece.write_to(sink)?;
        }
        Ok(())
    }

    fn writeable_length_hint(&self) -> LengthHint {
        self.pieces
            .iter()
            .map(Writeable::writeable_length_hint)
            .fold(LengthHint::exact(0), |acc, hint| acc + hint)
    }
}

impl_display_with_writeable!(FormattedDateTime);

/// Writes `num` left padded with zeros to at least `width` digits.
///
/// Negative values are written with a leading `-` ahead of the padding.
pub(crate) fn write_padded<W: Write + ?Sized>(
    num: i64,
    width: usize,
    sink: &mut W,
) -> core::fmt::Result {
    if num < 0 {
        sink.write_char('-')?;
    }
    let abs = num.unsigned_abs();
    let digits = count_digits(abs);
    for _ in digits..width {
        sink.write_char('0')?;
    }
    abs.write_to(sink)
}

/// Writes the last two digits of `num`, zero padded.
pub(crate) fn write_two_digit<W: Write + ?Sized>(num: i64, sink: &mut W) -> core::fmt::Result {
    write_padded(num.rem_euclid(100), 2, sink)
}

/// Writes the leading `precision` digits of a nanosecond value.
///
/// Precisions beyond nine digits are padded with zeros.
pub(crate) fn write_fraction<W: Write + ?Sized>(
    nanosecond: u32,
    precision: usize,
    sink: &mut W,
) -> core::fmt::Result {
    let digits = u32_to_digits(nanosecond);
    for digit in digits.iter().take(precision) {
        digit.write_to(sink)?;
    }
    for _ in digits.len()..precision {
        sink.write_char('0')?;
    }
    Ok(())
}

/// Splits a nanosecond value into its nine decimal digits.
pub(crate) fn u32_to_digits(mut value: u32) -> [u8; 9] {
    let mut output = [0; 9];
    let mut i = 9;
    while i != 0 {
        output[i - 1] = (value % 10) as u8;
        value /= 10;
        i -= 1;
    }
    output
}

fn count_digits(mut value: u64) -> usize {
    let mut digits = 1;
    while value >= 10 {
        value /= 10;
        digits += 1;
    }
    digits
}

/// The notation used when writing a UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OffsetNotation {
    /// `+05`, or `+0530` when minutes are present
    HoursOptionalMinutes,
    /// `+0530`
    Basic,
    /// `+05:30`
    Extended,
    /// `+053000`, seconds only when present
    BasicOptionalSeconds,
    /// `+05:30:00`, seconds only when present
    ExtendedOptionalSeconds,
}

/// Writes a UTC offset of `offset_seconds` in `notation`.
pub(crate) fn write_offset<W: Write + ?Sized>(
    offset_seconds: i32,
    notation: OffsetNotation,
    sink: &mut W,
) -> core::fmt::Result {
    let abs = offset_seconds.unsigned_abs() as i64;
    let hours = abs / i64::from(SECONDS_PER_HOUR);
    let minutes = (abs % i64::from(SECONDS_PER_HOUR)) / i64::from(SECONDS_PER_MINUTE);
    let seconds = abs % i64::from(SECONDS_PER_MINUTE);

    sink.write_char(Sign::from(offset_seconds).as_char())?;
    write_padded(hours, 2, sink)?;
    let separator = matches!(
        notation,
        OffsetNotation::Extended | OffsetNotation::ExtendedOptionalSeconds
    );
    if notation == OffsetNotation::HoursOptionalMinutes && minutes == 0 {
        return Ok(());
    }
    if separator {
        sink.write_char(':')?;
    }
    write_padded(minutes, 2, sink)?;
    let with_seconds = matches!(
        notation,
        OffsetNotation::BasicOptionalSeconds | OffsetNotation::ExtendedOptionalSeconds
    );
    if with_seconds && seconds != 0 {
        if separator {
            sink.write_char(':')?;
        }
        write_padded(seconds, 2, sink)?;
    }
    Ok(())
}

/// Writes a localized GMT offset: `GMT`, `GMT-4:30` or, when `long`,
/// `GMT-04:30`.
pub(crate) fn write_gmt_offset<W: Write + ?Sized>(
    offset_seconds: i32,
    long: bool,
    sink: &mut W,
) -> core::fmt::Result {
    sink.write_str("GMT")?;
    if offset_seconds == 0 {
        return Ok(());
    }
    let abs = offset_seconds.unsigned_abs() as i64;
    let hours = abs / i64::from(SECONDS_PER_HOUR);
    let minutes = (abs % i64::from(SECONDS_PER_HOUR)) / i64::from(SECONDS_PER_MINUTE);
    sink.write_char(Sign::from(offset_seconds).as_char())?;
    if long {
        write_padded(hours, 2, sink)?;
        sink.write_char(':')?;
        return write_padded(minutes, 2, sink);
    }
    hours.write_to(sink)?;
    if minutes != 0 {
        sink.write_char(':')?;
        write_padded(minutes, 2, sink)?;
    }
    Ok(())
}
