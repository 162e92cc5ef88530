//! Pattern lookup for skeletons and format strengths.
//!
//! Only English conventions are built in; other languages resolve to
//! nothing.

use alloc::{format, string::String};

use icu_locale::Locale;

use crate::FormatStrength;

/// Resolves a skeleton to the best matching pattern for a locale.
pub trait PatternGenerator {
    /// Returns the pattern for `skeleton`, or `None` if it cannot be resolved.
    fn best_pattern(&self, locale: &Locale, skeleton: &str) -> Option<String>;
}

/// The built-in English skeleton table.
#[derive(Debug, Default, Clone, Copy)]
pub struct SkeletonPatterns;

impl SkeletonPatterns {
    /// Creates a new `SkeletonPatterns`.
    #[inline]
    pub const fn new() -> Self {
        Self
    }
}

const DATE_SKELETONS: &[(&str, &str)] = &[
    ("y", "y"),
    ("yM", "M/y"),
    ("yMd", "M/d/y"),
    ("yMEd", "EEE, M/d/y"),
    ("yMMM", "MMM y"),
    ("yMMMd", "MMM d, y"),
    ("yMMMEd", "EEE, MMM d, y"),
    ("yMMMM", "MMMM y"),
    ("yMMMMd", "MMMM d, y"),
    ("yMMMMEEEEd", "EEEE, MMMM d, y"),
    ("yQQQ", "QQQ y"),
    ("yQQQQ", "QQQQ y"),
    ("GyMMMd", "MMM d, y G"),
    ("M", "L"),
    ("Md", "M/d"),
    ("MEd", "EEE, M/d"),
    ("MMM", "LLL"),
    ("MMMd", "MMM d"),
    ("MMMEd", "EEE, MMM d"),
    ("MMMMd", "MMMM d"),
    ("d", "d"),
    ("Ed", "d EEE"),
    ("E", "ccc"),
    ("EEEE", "cccc"),
];

const TIME_SKELETONS: &[(&str, &str)] = &[
    ("h", "h a"),
    ("H", "HH"),
    ("hm", "h:mm a"),
    ("Hm", "HH:mm"),
    ("hms", "h:mm:ss a"),
    ("Hms", "HH:mm:ss"),
    ("ms", "mm:ss"),
    ("hmv", "h:mm a v"),
    ("Hmv", "HH:mm v"),
    ("hmsv", "h:mm:ss a v"),
    ("Hmsv", "HH:mm:ss v"),
    ("hmz", "h:mm a z"),
    ("Hmz", "HH:mm z"),
    ("hmsz", "h:mm:ss a z"),
    ("Hmsz", "HH:mm:ss z"),
];

fn has_english_data(locale: &Locale) -> bool {
    matches!(locale.id.language.as_str(), "en" | "und")
}

fn lookup(table: &[(&str, &'static str)], skeleton: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| *key == skeleton)
        .map(|(_, pattern)| *pattern)
}

impl PatternGenerator for SkeletonPatterns {
    fn best_pattern(&self, locale: &Locale, skeleton: &str) -> Option<String> {
        if skeleton.is_empty() || !has_english_data(locale) {
            return None;
        }
        // `j` is the locale's preferred hour, which is `h` in English.
        let skeleton = skeleton.replace('j', "h");
        let split = skeleton
            .find(|c| matches!(c, 'h' | 'H' | 'm' | 's' | 'v' | 'z'))
            .unwrap_or(skeleton.len());
        let (date, time) = skeleton.split_at(split);

        match (date.is_empty(), time.is_empty()) {
            (false, true) => lookup(DATE_SKELETONS, date).map(String::from),
            (true, false) => lookup(TIME_SKELETONS, time).map(String::from),
            (false, false) => {
                let date = lookup(DATE_SKELETONS, date)?;
                let time = lookup(TIME_SKELETONS, time)?;
                Some(format!("{date}, {time}"))
            }
            (true, true) => None,
        }
    }
}

/// Returns the pattern for a date and time strength in `locale`.
///
/// Returns `None` when both strengths are [`FormatStrength::None`] or the
/// locale has no pattern data.
pub fn style_pattern(
    locale: &Locale,
    date_style: FormatStrength,
    time_style: FormatStrength,
) -> Option<String> {
    if !has_english_data(locale) {
        return None;
    }
    let date = match date_style {
        FormatStrength::None => None,
        FormatStrength::Short => Some("M/d/yy"),
        FormatStrength::Medium => Some("MMM d, y"),
        FormatStrength::Long => Some("MMMM d, y"),
        FormatStrength::Full => Some("EEEE, MMMM d, y"),
    };
    let time = match time_style {
        FormatStrength::None => None,
        FormatStrength::Short => Some("h:mm a"),
        FormatStrength::Medium => Some("h:mm:ss a"),
        FormatStrength::Long => Some("h:mm:ss a z"),
        FormatStrength::Full => Some("h:mm:ss a zzzz"),
    };
    match (date, time) {
        (Some(date), Some(time)) if date_style >= FormatStrength::Long => {
            Some(format!("{date} 'at' {time}"))
        }
        (Some(date), Some(time)) => Some(format!("{date}, {time}")),
        (Some(pattern), None) | (None, Some(pattern)) => Some(String::from(pattern)),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{style_pattern, PatternGenerator, SkeletonPatterns};
    use crate::FormatStrength;
    use icu_locale::{locale, Locale};

    #[test]
    fn english_skeletons() {
        let en: Locale = locale!("en-US");
        let generator = SkeletonPatterns::new();
        assert_eq!(generator.best_pattern(&en, "yMMMd").as_deref(), Some("MMM d, y"));
        assert_eq!(generator.best_pattern(&en, "jm").as_deref(), Some("h:mm a"));
        assert_eq!(
            generator.best_pattern(&en, "yMdHm").as_deref(),
            Some("M/d/y, HH:mm")
        );
        assert_eq!(generator.best_pattern(&en, "Hmv").as_deref(), Some("HH:mm v"));
    }

    #[test]
    fn unresolvable_skeletons() {
        let generator = SkeletonPatterns::new();
        assert_eq!(generator.best_pattern(&locale!("en"), ""), None);
        assert_eq!(generator.best_pattern(&locale!("en"), "yMMMMMd"), None);
        assert_eq!(generator.best_pattern(&locale!("en"), "yMdHmX"), None);
        assert_eq!(generator.best_pattern(&locale!("ja"), "yMd"), None);
    }

    #[test]
    fn strength_patterns() {
        let en = locale!("en");
        assert_eq!(
            style_pattern(&en, FormatStrength::Medium, FormatStrength::None).as_deref(),
            Some("MMM d, y")
        );
        assert_eq!(
            style_pattern(&en, FormatStrength::Short, FormatStrength::Short).as_deref(),
            Some("M/d/yy, h:mm a")
        );
        assert_eq!(
            style_pattern(&en, FormatStrength::Full, FormatStrength::Long).as_deref(),
            Some("EEEE, MMMM d, y 'at' h:mm:ss a z")
        );
        assert_eq!(
            style_pattern(&en, FormatStrength::None, FormatStrength::None),
            None
        );
        assert_eq!(
            style_pattern(&locale!("fr"), FormatStrength::Short, FormatStrength::None),
            None
        );
    }
}
