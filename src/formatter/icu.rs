//! The ICU backed formatter.

use alloc::{format, string::String};

use icu_locale::{locale, Locale};

use super::{check_kind, delegate, DateTimeFormatter};
use crate::{
    compat::{resolve_icu_pattern, TemporalKinds},
    engine::{style_pattern, IcuPatternEngine, PatternGenerator, RenderEngine},
    FormatContext, FormatError, FormatResult, FormatStrength, IcuFormatterOptions, TemporalKind,
};

/// A formatter for ICU style patterns.
///
/// The accepted kinds are resolved once, at construction, from the pattern
/// and the configured strengths:
///
/// - a date strength removes bare times,
/// - a time strength removes bare dates,
/// - a `long` or `full` time strength accepts only zoned values, as it
///   displays a zone name.
///
/// ```rust
/// use temporal_format::{
///     DateTimeFormatter, FormatContext, FormatStrength, IcuFormatter, IcuFormatterOptions,
/// };
/// use jiff::civil::date;
///
/// let options = IcuFormatterOptions::default().with_date_style(FormatStrength::Medium);
/// let formatter = IcuFormatter::try_new(options, None).unwrap();
/// assert_eq!(formatter.pattern(), "MMM d, y");
///
/// let context = FormatContext::from(date(2024, 3, 9));
/// assert_eq!(formatter.format(&context).unwrap(), "Mar 9, 2024");
/// ```
#[derive(Debug, Clone)]
pub struct IcuFormatter<E = IcuPatternEngine> {
    engine: E,
    locale: Locale,
    pattern: String,
    time_style: FormatStrength,
    kinds: TemporalKinds,
}

impl IcuFormatter {
    /// Creates a new `IcuFormatter`.
    ///
    /// Without a `pattern`, one is derived from the date and time strengths
    /// of `options`.
    pub fn try_new(options: IcuFormatterOptions, pattern: Option<&str>) -> FormatResult<Self> {
        Self::try_new_with_engine(IcuPatternEngine, options, pattern)
    }

    /// Creates a new `IcuFormatter` from the best pattern for `skeleton`.
    pub fn try_from_skeleton(
        options: IcuFormatterOptions,
        skeleton: &str,
        generator: &impl PatternGenerator,
    ) -> FormatResult<Self> {
        let locale = resolve_locale(options.locale.as_ref());
        let pattern = generator.best_pattern(&locale, skeleton).ok_or_else(|| {
            FormatError::unresolvable().with_message(format!(
                "skeleton \"{skeleton}\" cannot be resolved to a pattern for {locale}"
            ))
        })?;
        Self::try_new(options, Some(&pattern))
    }
}

impl<E: RenderEngine> IcuFormatter<E> {
    /// Creates a new `IcuFormatter` that renders with `engine`.
    pub fn try_new_with_engine(
        engine: E,
        options: IcuFormatterOptions,
        pattern: Option<&str>,
    ) -> FormatResult<Self> {
        let locale = resolve_locale(options.locale.as_ref());
        let pattern = match pattern {
            Some(pattern) => String::from(pattern),
            None => style_pattern(&locale, options.date_style, options.time_style).ok_or_else(
                || {
                    FormatError::unresolvable().with_message(format!(
                        "no pattern for date style {} and time style {} in {locale}",
                        options.date_style, options.time_style
                    ))
                },
            )?,
        };

        let mut kinds = resolve_icu_pattern(&pattern);
        if options.date_style.is_some() {
            kinds.remove(TemporalKinds::TIME);
        }
        if options.time_style.is_some() {
            kinds.remove(TemporalKinds::DATE);
        }
        if options.time_style.requires_zone() {
            kinds &= TemporalKinds::ZONED;
        }
        if kinds.is_empty() {
            return Err(FormatError::unresolvable().with_message(format!(
                "pattern \"{pattern}\" is not compatible with any value"
            )));
        }

        Ok(Self {
            engine,
            locale,
            pattern,
            time_style: options.time_style,
            kinds,
        })
    }

    /// Returns the rendering engine.
    #[inline]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Replaces the rendering engine.
    pub fn with_engine<F: RenderEngine>(self, engine: F) -> IcuFormatter<F> {
        IcuFormatter {
            engine,
            locale: self.locale,
            pattern: self.pattern,
            time_style: self.time_style,
            kinds: self.kinds,
        }
    }

    /// Returns the pattern this formatter renders.
    #[inline]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns the resolved locale.
    #[inline]
    pub fn locale(&self) -> &Locale {
        &self.locale
    }
}

impl<E: RenderEngine> DateTimeFormatter for IcuFormatter<E> {
    fn accepted_kinds(&self) -> TemporalKinds {
        self.kinds
    }

    fn format(&self, context: &FormatContext) -> FormatResult<String> {
        let kind = context.kind();
        if self.time_style.requires_zone() && kind != TemporalKind::Zoned {
            #[cfg(feature = "log")]
            log::debug!("rejected {kind} value for {} time style", self.time_style);
            return Err(FormatError::incompatible().with_message(format!(
                "pattern \"{}\" with a {} time style is not compatible with a {kind} value",
                self.pattern, self.time_style
            )));
        }
        check_kind(self.kinds, kind, &self.pattern)?;
        delegate(&self.engine, &self.pattern, Some(&self.locale), context)
    }
}

/// Resolves the requested locale, defaulting to English.
fn resolve_locale(requested: Option<&Locale>) -> Locale {
    requested.cloned().unwrap_or(locale!("en"))
}
