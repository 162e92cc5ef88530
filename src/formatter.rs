//! Formatter dispatch.
//!
//! A formatter is bound to one pattern and one [`RenderEngine`]. Formatting
//! checks the runtime kind of the context's value against the kinds the
//! pattern can render, then delegates to the engine.

use alloc::{format, string::String};

use crate::{
    compat::TemporalKinds, engine::RenderEngine, FormatContext, FormatError, FormatResult,
    TemporalKind,
};

mod icu;
mod native;

#[cfg(test)]
mod tests;

pub use icu::IcuFormatter;
pub use native::NativeFormatter;

/// A strategy that renders a [`FormatContext`] to a string.
pub trait DateTimeFormatter {
    /// Returns the kinds of value this formatter accepts.
    fn accepted_kinds(&self) -> TemporalKinds;

    /// Renders the value of `context`.
    fn format(&self, context: &FormatContext) -> FormatResult<String>;

    /// Returns whether a value of `kind` would be accepted.
    fn accepts(&self, kind: TemporalKind) -> bool {
        self.accepted_kinds().contains_kind(kind)
    }
}

impl<F: DateTimeFormatter + ?Sized> DateTimeFormatter for &F {
    fn accepted_kinds(&self) -> TemporalKinds {
        (**self).accepted_kinds()
    }

    fn format(&self, context: &FormatContext) -> FormatResult<String> {
        (**self).format(context)
    }
}

/// Fails with an incompatibility error unless `kinds` holds `kind`.
pub(crate) fn check_kind(
    kinds: TemporalKinds,
    kind: TemporalKind,
    pattern: &str,
) -> FormatResult<()> {
    if kinds.contains_kind(kind) {
        return Ok(());
    }
    #[cfg(feature = "log")]
    log::debug!("rejected {kind} value for pattern {pattern:?}, accepted {kinds:?}");
    Err(FormatError::incompatible().with_message(format!(
        "pattern \"{pattern}\" is not compatible with a {kind} value"
    )))
}

/// Delegates rendering of `context` to `engine`.
pub(crate) fn delegate<E: RenderEngine>(
    engine: &E,
    pattern: &str,
    locale: Option<&icu_locale::Locale>,
    context: &FormatContext,
) -> FormatResult<String> {
    let value = context.value();
    let zone = value
        .time_zone()
        .cloned()
        .unwrap_or(jiff::tz::TimeZone::UTC);
    engine.render(pattern, locale, &zone, value)
}
