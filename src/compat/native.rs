//! Compatibility scanning for native calendar format strings.
//!
//! A backslash escapes exactly the character that follows it.

use super::{narrow, CharClass, TemporalKinds};

/// Classifies an unescaped native format character.
pub const fn classify_native(c: char) -> Option<CharClass> {
    match c {
        'd' | 'j' | 'S' | 'D' | 'l' | 'N' | 'w' | 'z' | 'W' | 'o' | 'F' | 'm' | 'M' | 'n'
        | 't' | 'L' | 'Y' | 'y' => Some(CharClass::Date),
        'a' | 'A' | 'g' | 'G' | 'h' | 'H' | 'B' | 'i' | 's' | 'v' | 'u' => Some(CharClass::Time),
        'e' | 'T' | 'I' | 'c' | 'r' | 'U' | 'O' | 'P' | 'p' | 'Z' => Some(CharClass::Zone),
        _ => None,
    }
}

/// Resolves the kinds a native `format` string can render.
pub fn resolve_native_format(format: &str) -> TemporalKinds {
    let mut escaped = false;
    let classes = format.chars().filter_map(move |c| {
        if escaped {
            escaped = false;
            return None;
        }
        if c == '\\' {
            escaped = true;
            return None;
        }
        classify_native(c)
    });
    let kinds = narrow(classes);
    #[cfg(feature = "log")]
    log::trace!("native format {format:?} resolved to {kinds:?}");
    kinds
}
