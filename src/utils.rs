//! Utility date and time equations for the rendering engines

use jiff::civil::{Date, Time};

use crate::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

/// The epoch day number of 1858-11-17, the origin of the Modified Julian Day.
pub(crate) const MJD_EPOCH_DAYS: i64 = -40_587;

/// Returns the epoch day number for a given year.
pub(crate) fn epoch_day_number_for_year(y: i64) -> i64 {
    365 * (y - 1970) + (y - 1969).div_euclid(4) - (y - 1901).div_euclid(100)
        + (y - 1601).div_euclid(400)
}

/// Returns the number of days from 1970-01-01 to `date`.
pub(crate) fn epoch_days(date: Date) -> i64 {
    epoch_day_number_for_year(i64::from(date.year())) + i64::from(date.day_of_year()) - 1
}

/// Returns the Modified Julian Day number of `date`.
pub(crate) fn modified_julian_day(date: Date) -> i64 {
    epoch_days(date) - MJD_EPOCH_DAYS
}

/// Returns the number of seconds elapsed since midnight at `time`.
pub(crate) fn seconds_in_day(time: Time) -> i64 {
    i64::from(time.hour()) * i64::from(SECONDS_PER_HOUR)
        + i64::from(time.minute()) * i64::from(SECONDS_PER_MINUTE)
        + i64::from(time.second())
}

/// Returns the number of milliseconds elapsed since midnight at `time`.
pub(crate) fn milliseconds_in_day(time: Time) -> i64 {
    seconds_in_day(time) * 1_000 + i64::from(time.subsec_nanosecond()) / 1_000_000
}

/// Returns the Swatch Internet Time beat of a wall-clock `time` observed at
/// `offset_seconds` from UTC.
///
/// Beats are counted from midnight at UTC+01:00.
pub(crate) fn swatch_beat(time: Time, offset_seconds: i32) -> i64 {
    let biel = (seconds_in_day(time) - i64::from(offset_seconds) + i64::from(SECONDS_PER_HOUR))
        .rem_euclid(SECONDS_PER_DAY);
    biel * 1_000 / SECONDS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::{epoch_days, milliseconds_in_day, modified_julian_day, swatch_beat};
    use jiff::civil::{date, time};

    #[test]
    fn epoch_day_numbers() {
        assert_eq!(epoch_days(date(1970, 1, 1)), 0);
        assert_eq!(epoch_days(date(1969, 12, 31)), -1);
        assert_eq!(epoch_days(date(2000, 3, 1)), 11_017);
        assert_eq!(epoch_days(date(2024, 3, 9)), 19_791);
        assert_eq!(epoch_days(date(1600, 1, 1)), -135_140);
    }

    #[test]
    fn modified_julian_days() {
        assert_eq!(modified_julian_day(date(1858, 11, 17)), 0);
        assert_eq!(modified_julian_day(date(2000, 1, 1)), 51_544);
    }

    #[test]
    fn time_of_day_counts() {
        assert_eq!(milliseconds_in_day(time(0, 0, 1, 500_000_000)), 1_500);
        assert_eq!(swatch_beat(time(23, 0, 0, 0), 0), 0);
        assert_eq!(swatch_beat(time(12, 0, 0, 0), 3_600), 500);
    }
}
