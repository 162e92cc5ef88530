//! Compatibility scanning for ICU style patterns.
//!
//! Literal runs are delimited by `'`. Every quote toggles literal mode, so a
//! doubled `''` leaves the mode unchanged.

use super::{narrow, CharClass, TemporalKinds};

/// Classifies an unquoted ICU pattern character.
pub const fn classify_icu(c: char) -> Option<CharClass> {
    match c {
        'G' | 'y' | 'Y' | 'u' | 'U' | 'r' | 'Q' | 'q' | 'M' | 'L' | 'w' | 'W' | 'd' | 'D'
        | 'F' | 'g' | 'E' | 'e' | 'c' => Some(CharClass::Date),
        'a' | 'h' | 'H' | 'k' | 'K' | 'm' | 's' | 'S' | 'A' => Some(CharClass::Time),
        'z' | 'Z' | 'O' | 'v' | 'V' | 'X' | 'x' => Some(CharClass::Zone),
        _ => None,
    }
}

/// Resolves the kinds an ICU style `pattern` can render.
pub fn resolve_icu_pattern(pattern: &str) -> TemporalKinds {
    let mut literal = false;
    let classes = pattern.chars().filter_map(move |c| {
        if c == '\'' {
            literal = !literal;
            return None;
        }
        if literal {
            return None;
        }
        classify_icu(c)
    });
    let kinds = narrow(classes);
    #[cfg(feature = "log")]
    log::trace!("ICU pattern {pattern:?} resolved to {kinds:?}");
    kinds
}

#[cfg(test)]
mod tests {
    use super::resolve_icu_pattern;
    use crate::TemporalKinds;

    const NOT_TIME: TemporalKinds = TemporalKinds::DATE
        .union(TemporalKinds::DATE_TIME)
        .union(TemporalKinds::ZONED);
    const NOT_DATE: TemporalKinds = TemporalKinds::TIME
        .union(TemporalKinds::DATE_TIME)
        .union(TemporalKinds::ZONED);

    #[test]
    fn unclassified_patterns_keep_every_kind() {
        assert_eq!(resolve_icu_pattern(""), TemporalKinds::ALL);
        assert_eq!(resolve_icu_pattern("-/:., "), TemporalKinds::ALL);
        assert_eq!(resolve_icu_pattern("'yyyy HH:mm z'"), TemporalKinds::ALL);
        assert_eq!(resolve_icu_pattern("Bnbj"), TemporalKinds::ALL);
    }

    #[test]
    fn date_pattern() {
        assert_eq!(resolve_icu_pattern("yyyy-MM-dd"), NOT_TIME);
        assert_eq!(resolve_icu_pattern("EEEE, MMMM d"), NOT_TIME);
    }

    #[test]
    fn time_pattern() {
        assert_eq!(resolve_icu_pattern("HH:mm:ss"), NOT_DATE);
        assert_eq!(resolve_icu_pattern("h:mm a"), NOT_DATE);
    }

    #[test]
    fn date_time_and_zone_patterns() {
        assert_eq!(
            resolve_icu_pattern("yyyy-MM-dd HH:mm"),
            TemporalKinds::DATE_TIME | TemporalKinds::ZONED
        );
        assert_eq!(resolve_icu_pattern("HH:mm z"), TemporalKinds::ZONED);
        assert_eq!(resolve_icu_pattern("xxx"), TemporalKinds::ZONED);
    }

    #[test]
    fn quoted_letters_are_not_classified() {
        assert_eq!(resolve_icu_pattern("'yyyy'-MM"), NOT_TIME);
        assert_eq!(resolve_icu_pattern("'at' HH"), NOT_DATE);
        // A doubled quote toggles twice and classifies nothing itself.
        assert_eq!(resolve_icu_pattern("HH''mm"), NOT_DATE);
        assert_eq!(resolve_icu_pattern("''yyyy"), NOT_TIME);
        // An unterminated literal swallows the rest.
        assert_eq!(resolve_icu_pattern("'HH:mm"), TemporalKinds::ALL);
    }

    #[test]
    fn appending_never_grows_the_set() {
        let pattern = "'Day' d 'of' MMMM, y 'at' h:mm a zzzz";
        let mut previous = TemporalKinds::ALL;
        for end in 0..=pattern.len() {
            let current = resolve_icu_pattern(&pattern[..end]);
            assert!(previous.contains(current));
            previous = current;
        }
        assert_eq!(previous, TemporalKinds::ZONED);
    }
}
