//! Rendering engines.
//!
//! The formatters decide whether a value may be rendered by a pattern; an
//! engine decides how. Two engines are built in: [`IcuPatternEngine`] for
//! ICU style patterns and [`NativeFormatEngine`] for backslash escaped
//! native calendar format strings.

use alloc::string::{String, ToString};

use icu_locale::Locale;
use jiff::{
    civil::{Date, Time},
    tz::TimeZone,
    Timestamp,
};

use crate::{value::zone_identifier, FormatError, FormatResult, TemporalValue};

mod icu;
mod names;
mod native;
mod skeleton;
mod write;

pub use icu::IcuPatternEngine;
pub use native::NativeFormatEngine;
pub use skeleton::{style_pattern, PatternGenerator, SkeletonPatterns};

/// An engine that renders a temporal value through a pattern.
pub trait RenderEngine {
    /// Renders `value` with `pattern`.
    ///
    /// `zone` supplies zone data for values that carry none of their own.
    fn render(
        &self,
        pattern: &str,
        locale: Option<&Locale>,
        zone: &TimeZone,
        value: &TemporalValue,
    ) -> FormatResult<String>;
}

impl<E: RenderEngine + ?Sized> RenderEngine for &E {
    fn render(
        &self,
        pattern: &str,
        locale: Option<&Locale>,
        zone: &TimeZone,
        value: &TemporalValue,
    ) -> FormatResult<String> {
        (**self).render(pattern, locale, zone, value)
    }
}

/// Zone data resolved for one instant.
#[derive(Debug, Clone)]
pub(crate) struct ZoneView {
    pub(crate) offset_seconds: i32,
    pub(crate) identifier: String,
    pub(crate) abbreviation: String,
    pub(crate) is_dst: bool,
    /// Seconds since the Unix epoch; absent when the value has no instant.
    pub(crate) epoch_seconds: Option<i64>,
}

/// The components of a value an engine may render.
#[derive(Debug, Clone)]
pub(crate) struct DateTimeView {
    pub(crate) date: Option<Date>,
    pub(crate) time: Option<Time>,
    pub(crate) zone: Option<ZoneView>,
}

impl DateTimeView {
    /// Resolves the components of `value`, taking zone data from `zone`.
    ///
    /// Civil values outside the range of an instant keep their date and
    /// time; only a fixed zone applies to them, as to a bare time.
    pub(crate) fn new(value: &TemporalValue, zone: &TimeZone) -> Self {
        let zoned = match value {
            TemporalValue::Zoned(zdt) => Some(zdt.with_time_zone(zone.clone())),
            TemporalValue::DateTime(dt) => dt.to_zoned(zone.clone()).ok(),
            TemporalValue::Date(date) => date.to_zoned(zone.clone()).ok(),
            TemporalValue::Time(_) => None,
        };

        let Some(zdt) = zoned else {
            return Self {
                date: value.date(),
                time: value.time(),
                zone: fixed_zone_view(zone),
            };
        };

        let info = zone.to_offset_info(zdt.timestamp());
        let offset_seconds = zdt.offset().seconds();
        let zone_view = ZoneView {
            offset_seconds,
            identifier: zone_identifier(zone, offset_seconds),
            abbreviation: info.abbreviation().to_string(),
            is_dst: info.dst().is_dst(),
            epoch_seconds: Some(zdt.timestamp().as_second()),
        };
        // Only the components the value carries are exposed.
        Self {
            date: value.date().map(|_| zdt.date()),
            time: value.time().map(|_| zdt.time()),
            zone: Some(zone_view),
        }
    }

    pub(crate) fn require_date(&self, field: char) -> FormatResult<Date> {
        self.date.ok_or_else(|| missing("date", field))
    }

    pub(crate) fn require_time(&self, field: char) -> FormatResult<Time> {
        self.time.ok_or_else(|| missing("time", field))
    }

    pub(crate) fn require_zone(&self, field: char) -> FormatResult<&ZoneView> {
        self.zone.as_ref().ok_or_else(|| missing("zone", field))
    }
}

fn missing(component: &'static str, field: char) -> FormatError {
    FormatError::range().with_message(alloc::format!(
        "pattern field '{field}' requires a {component} the value does not carry"
    ))
}

/// Zone data for a value with no instant, available only for fixed zones.
fn fixed_zone_view(zone: &TimeZone) -> Option<ZoneView> {
    let offset = zone.to_fixed_offset().ok()?;
    let info = zone.to_offset_info(Timestamp::UNIX_EPOCH);
    Some(ZoneView {
        offset_seconds: offset.seconds(),
        identifier: zone_identifier(zone, offset.seconds()),
        abbreviation: info.abbreviation().to_string(),
        is_dst: false,
        epoch_seconds: None,
    })
}
