//! English display names used by the built-in engines.

use jiff::civil::Weekday;

/// The width of a displayed name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NameWidth {
    /// `Sep`, `Tue`
    Abbreviated,
    /// `September`, `Tuesday`
    Wide,
    /// `S`, `T`
    Narrow,
    /// `Tu`; weekdays only, months use `Abbreviated`.
    Short,
}

impl NameWidth {
    /// Maps the repeat count of a text field to a width.
    pub(crate) const fn from_count(count: usize) -> Self {
        match count {
            0..=3 => Self::Abbreviated,
            4 => Self::Wide,
            5 => Self::Narrow,
            _ => Self::Short,
        }
    }
}

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// Sunday first, matching `Weekday::to_sunday_zero_offset`.
const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Returns the name of `month` (1-12) at `width`.
pub(crate) fn month_name(month: i8, width: NameWidth) -> &'static str {
    let wide = MONTHS[(month.clamp(1, 12) - 1) as usize];
    match width {
        NameWidth::Wide => wide,
        NameWidth::Narrow => &wide[..1],
        NameWidth::Abbreviated | NameWidth::Short => &wide[..3],
    }
}

/// Returns the name of `weekday` at `width`.
pub(crate) fn weekday_name(weekday: Weekday, width: NameWidth) -> &'static str {
    let wide = WEEKDAYS[weekday.to_sunday_zero_offset() as usize];
    match width {
        NameWidth::Wide => wide,
        NameWidth::Abbreviated => &wide[..3],
        NameWidth::Short => &wide[..2],
        NameWidth::Narrow => &wide[..1],
    }
}

/// Returns the era name of `year` at `width`.
pub(crate) fn era_name(year: i16, width: NameWidth) -> &'static str {
    let common = year > 0;
    match (width, common) {
        (NameWidth::Wide, true) => "Anno Domini",
        (NameWidth::Wide, false) => "Before Christ",
        (NameWidth::Narrow, true) => "A",
        (NameWidth::Narrow, false) => "B",
        (_, true) => "AD",
        (_, false) => "BC",
    }
}

/// Returns the quarter name of `quarter` (1-4) at `width`.
pub(crate) fn quarter_name(quarter: i8, width: NameWidth) -> &'static str {
    let index = (quarter.clamp(1, 4) - 1) as usize;
    match width {
        NameWidth::Wide => ["1st quarter", "2nd quarter", "3rd quarter", "4th quarter"][index],
        NameWidth::Narrow => ["1", "2", "3", "4"][index],
        NameWidth::Abbreviated | NameWidth::Short => ["Q1", "Q2", "Q3", "Q4"][index],
    }
}

/// Returns the day period of `hour` (0-23).
pub(crate) fn day_period(hour: i8, upper: bool) -> &'static str {
    match (hour < 12, upper) {
        (true, true) => "AM",
        (false, true) => "PM",
        (true, false) => "am",
        (false, false) => "pm",
    }
}

/// Returns the English ordinal suffix of `day`.
pub(crate) fn ordinal_suffix(day: i8) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {
    use super::{era_name, month_name, ordinal_suffix, weekday_name, NameWidth};
    use jiff::civil::Weekday;

    #[test]
    fn month_widths() {
        assert_eq!(month_name(9, NameWidth::Wide), "September");
        assert_eq!(month_name(9, NameWidth::Abbreviated), "Sep");
        assert_eq!(month_name(9, NameWidth::Narrow), "S");
    }

    #[test]
    fn weekday_widths() {
        assert_eq!(weekday_name(Weekday::Tuesday, NameWidth::Wide), "Tuesday");
        assert_eq!(weekday_name(Weekday::Tuesday, NameWidth::Short), "Tu");
        assert_eq!(weekday_name(Weekday::Sunday, NameWidth::Abbreviated), "Sun");
    }

    #[test]
    fn eras_and_ordinals() {
        assert_eq!(era_name(2024, NameWidth::Abbreviated), "AD");
        assert_eq!(era_name(0, NameWidth::Wide), "Before Christ");
        assert_eq!(ordinal_suffix(1), "st");
        assert_eq!(ordinal_suffix(12), "th");
        assert_eq!(ordinal_suffix(22), "nd");
        assert_eq!(ordinal_suffix(23), "rd");
    }
}
