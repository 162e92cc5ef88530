use alloc::{
    format,
    string::{String, ToString},
};
use core::cell::RefCell;

use icu_locale::{locale, Locale};
use jiff::{
    civil::{date, time},
    tz::{Offset, TimeZone},
};

use super::{DateTimeFormatter, IcuFormatter, NativeFormatter};
use crate::{
    compat::TemporalKinds,
    engine::{RenderEngine, SkeletonPatterns},
    error::ErrorKind,
    FormatContext, FormatError, FormatResult, FormatStrength, IcuFormatterOptions, TemporalKind,
    TemporalValue,
};

/// Records the arguments of the last render call.
#[derive(Debug, Default)]
struct Recorder {
    last: RefCell<Option<(String, Option<Locale>, TimeZone)>>,
}

impl RenderEngine for Recorder {
    fn render(
        &self,
        pattern: &str,
        locale: Option<&Locale>,
        zone: &TimeZone,
        _value: &TemporalValue,
    ) -> FormatResult<String> {
        *self.last.borrow_mut() = Some((pattern.to_string(), locale.cloned(), zone.clone()));
        Ok("rendered".to_string())
    }
}

struct Failing;

impl RenderEngine for Failing {
    fn render(
        &self,
        _pattern: &str,
        _locale: Option<&Locale>,
        _zone: &TimeZone,
        _value: &TemporalValue,
    ) -> FormatResult<String> {
        Err(FormatError::syntax().with_message("unsupported locale data"))
    }
}

fn zoned_context() -> FormatContext {
    let tz = TimeZone::fixed(Offset::from_seconds(-16200).unwrap());
    FormatContext::from(date(2024, 3, 9).at(9, 5, 0, 0).to_zoned(tz).unwrap())
}

fn icu(pattern: &str) -> IcuFormatter {
    IcuFormatter::try_new(IcuFormatterOptions::default(), Some(pattern)).unwrap()
}

#[test]
fn icu_date_pattern() {
    let formatter = icu("yyyy-MM-dd");
    assert_eq!(
        formatter.accepted_kinds(),
        TemporalKinds::DATE | TemporalKinds::DATE_TIME | TemporalKinds::ZONED
    );

    let context = FormatContext::from(date(2024, 3, 9));
    assert_eq!(formatter.format(&context).unwrap(), "2024-03-09");
    assert_eq!(formatter.format(&zoned_context()).unwrap(), "2024-03-09");

    let err = formatter
        .format(&FormatContext::from(time(9, 5, 0, 0)))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Incompatible);
    assert!(err.message().contains("yyyy-MM-dd"));
    assert!(err.message().contains("time"));
}

#[test]
fn icu_quoted_letters_are_ignored() {
    let formatter = icu("'yyyy'-MM");
    assert!(!formatter.accepts(TemporalKind::Time));
    assert!(formatter.accepts(TemporalKind::Date));

    let formatter = icu("'at' HH:mm");
    assert!(formatter.accepts(TemporalKind::Time));
    assert!(!formatter.accepts(TemporalKind::Date));
    let context = FormatContext::from(time(9, 5, 0, 0));
    assert_eq!(formatter.format(&context).unwrap(), "at 09:05");
}

#[test]
fn icu_zone_pattern_requires_zoned_value() {
    let formatter = icu("HH:mm O");
    assert_eq!(formatter.accepted_kinds(), TemporalKinds::ZONED);
    assert_eq!(formatter.format(&zoned_context()).unwrap(), "09:05 GMT-4:30");

    let context = FormatContext::from(date(2024, 3, 9).at(9, 5, 0, 0));
    let err = formatter.format(&context).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Incompatible);
}

#[test]
fn icu_long_time_style_rejects_unzoned_values() {
    for style in [FormatStrength::Long, FormatStrength::Full] {
        let options = IcuFormatterOptions::default().with_time_style(style);
        // The pattern alone would accept a plain time.
        let formatter = IcuFormatter::try_new(options, Some("h:mm a")).unwrap();
        assert_eq!(formatter.accepted_kinds(), TemporalKinds::ZONED);

        let err = formatter
            .format(&FormatContext::from(time(9, 5, 0, 0)))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Incompatible);
        assert_eq!(
            err.message(),
            format!(
                "pattern \"h:mm a\" with a {style} time style is not compatible with a time value"
            )
        );
        assert!(formatter.format(&zoned_context()).is_ok());
    }
}

#[test]
fn icu_styles_narrow_kinds() {
    let options = IcuFormatterOptions::default().with_date_style(FormatStrength::Short);
    let formatter = IcuFormatter::try_new(options, None).unwrap();
    assert_eq!(formatter.pattern(), "M/d/yy");
    assert!(!formatter.accepts(TemporalKind::Time));
    let context = FormatContext::from(date(2024, 3, 9));
    assert_eq!(formatter.format(&context).unwrap(), "3/9/24");

    let options = IcuFormatterOptions::default().with_time_style(FormatStrength::Short);
    let formatter = IcuFormatter::try_new(options, None).unwrap();
    assert!(!formatter.accepts(TemporalKind::Date));
    let context = FormatContext::from(time(21, 5, 0, 0));
    assert_eq!(formatter.format(&context).unwrap(), "9:05 PM");

    let options = IcuFormatterOptions::default()
        .with_date_style(FormatStrength::Medium)
        .with_time_style(FormatStrength::Medium);
    let formatter = IcuFormatter::try_new(options, None).unwrap();
    assert_eq!(
        formatter.accepted_kinds(),
        TemporalKinds::DATE_TIME | TemporalKinds::ZONED
    );
    let context = FormatContext::from(date(2024, 3, 9).at(21, 5, 7, 0));
    assert_eq!(formatter.format(&context).unwrap(), "Mar 9, 2024, 9:05:07 PM");
}

#[test]
fn icu_unresolvable_construction() {
    let err = IcuFormatter::try_new(IcuFormatterOptions::default(), None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unresolvable);

    // A date strength removes times and the pattern removes dates.
    let options = IcuFormatterOptions::default().with_date_style(FormatStrength::Short);
    let formatter = IcuFormatter::try_new(options, Some("HH:mm")).unwrap();
    assert_eq!(
        formatter.accepted_kinds(),
        TemporalKinds::DATE_TIME | TemporalKinds::ZONED
    );

    let options = IcuFormatterOptions::default().with_locale(locale!("ja"));
    let err = IcuFormatter::try_from_skeleton(options, "yMd", &SkeletonPatterns).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unresolvable);
    assert!(err.message().contains("yMd"));
}

#[test]
fn icu_skeleton_construction() {
    let formatter =
        IcuFormatter::try_from_skeleton(IcuFormatterOptions::default(), "yMMMd", &SkeletonPatterns)
            .unwrap();
    assert_eq!(formatter.pattern(), "MMM d, y");
    assert_eq!(formatter.locale(), &locale!("en"));
    let context = FormatContext::from(date(2024, 3, 9));
    assert_eq!(formatter.format(&context).unwrap(), "Mar 9, 2024");
}

#[test]
fn icu_delegates_locale_and_zone() {
    let options = IcuFormatterOptions::default().with_locale(locale!("en-GB"));
    let formatter = IcuFormatter::try_new(options, Some("d"))
        .unwrap()
        .with_engine(Recorder::default());
    assert_eq!(
        formatter.format(&FormatContext::from(date(2024, 3, 9))).unwrap(),
        "rendered"
    );
    {
        let last = formatter.engine().last.borrow();
        let (pattern, locale, zone) = last.as_ref().unwrap();
        assert_eq!(pattern, "d");
        assert_eq!(locale.as_ref(), Some(&locale!("en-GB")));
        assert_eq!(zone.to_fixed_offset().unwrap(), Offset::UTC);
    }

    formatter.format(&zoned_context()).unwrap();
    let last = formatter.engine().last.borrow();
    let (_, _, zone) = last.as_ref().unwrap();
    assert_eq!(
        zone.to_fixed_offset().unwrap(),
        Offset::from_seconds(-16200).unwrap()
    );
}

#[test]
fn engine_errors_pass_through() {
    let formatter = icu("yyyy").with_engine(Failing);
    let err = formatter
        .format(&FormatContext::from(date(2024, 3, 9)))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert_eq!(err.message(), "unsupported locale data");

    let formatter = NativeFormatter::new("Y").with_engine(Failing);
    let err = formatter
        .format(&FormatContext::from(date(2024, 3, 9)))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntax);
}

#[test]
fn civil_values_at_the_calendar_edges() {
    let earliest = FormatContext::from(date(-9999, 1, 1));
    assert_eq!(icu("u-MM-dd").format(&earliest).unwrap(), "-9999-01-01");
    assert_eq!(icu("yyyy-MM-dd G").format(&earliest).unwrap(), "10000-01-01 BC");

    let latest = FormatContext::from(date(9999, 12, 31));
    assert_eq!(icu("yyyy-MM-dd").format(&latest).unwrap(), "9999-12-31");

    let context = FormatContext::from(date(9999, 12, 31).at(23, 0, 0, 0));
    let formatter = NativeFormatter::new("Y-m-d H:i");
    assert_eq!(formatter.format(&context).unwrap(), "9999-12-31 23:00");
}

#[test]
fn native_time_format() {
    let formatter = NativeFormatter::new("G:i:s");
    assert_eq!(
        formatter.accepted_kinds(),
        TemporalKinds::TIME | TemporalKinds::DATE_TIME | TemporalKinds::ZONED
    );
    let context = FormatContext::from(time(9, 5, 0, 0));
    assert_eq!(formatter.format(&context).unwrap(), "9:05:00");

    let formatter = NativeFormatter::new("H:i:s");
    assert_eq!(formatter.format(&context).unwrap(), "09:05:00");
    let err = formatter
        .format(&FormatContext::from(date(2024, 3, 9)))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Incompatible);
    assert_eq!(
        err.message(),
        "pattern \"H:i:s\" is not compatible with a date value"
    );
}

#[test]
fn native_escapes_and_zones() {
    let formatter = NativeFormatter::new("\\Y\\e\\a\\r: Y");
    assert_eq!(formatter.format_string(), "\\Y\\e\\a\\r: Y");
    assert!(formatter.accepts(TemporalKind::Date));
    let context = FormatContext::from(date(2024, 3, 9));
    assert_eq!(formatter.format(&context).unwrap(), "Year: 2024");

    let formatter = NativeFormatter::new("Y-m-d H:i P");
    assert_eq!(formatter.accepted_kinds(), TemporalKinds::ZONED);
    assert_eq!(
        formatter.format(&zoned_context()).unwrap(),
        "2024-03-09 09:05 -04:30"
    );
}

#[test]
fn native_passes_no_locale() {
    let formatter = NativeFormatter::new("d").with_engine(Recorder::default());
    formatter
        .format(&FormatContext::from(date(2024, 3, 9)))
        .unwrap();
    let last = formatter.engine().last.borrow();
    let (pattern, locale, _) = last.as_ref().unwrap();
    assert_eq!(pattern, "d");
    assert_eq!(locale, &None);
}

#[test]
fn formatting_is_idempotent() {
    let formatter = icu("EEEE, MMMM d");
    let context = FormatContext::from(date(2024, 3, 9));
    let first = formatter.format(&context).unwrap();
    assert_eq!(first, formatter.format(&context).unwrap());
    assert_eq!(first, "Saturday, March 9");

    let by_ref: &dyn DateTimeFormatter = &formatter;
    assert_eq!(by_ref.format(&context).unwrap(), first);
    assert_eq!(format!("{}", context.kind()), "date");
}
