//! The native calendar formatter.

use alloc::string::String;

use super::{check_kind, delegate, DateTimeFormatter};
use crate::{
    compat::{resolve_native_format, TemporalKinds},
    engine::{NativeFormatEngine, RenderEngine},
    FormatContext, FormatResult,
};

/// A formatter for native calendar format strings, such as `Y-m-d H:i:s`.
#[derive(Debug, Clone)]
pub struct NativeFormatter<E = NativeFormatEngine> {
    engine: E,
    format: String,
    kinds: TemporalKinds,
}

impl NativeFormatter {
    /// Creates a new `NativeFormatter` for `format`.
    pub fn new(format: &str) -> Self {
        Self::new_with_engine(NativeFormatEngine, format)
    }
}

impl<E: RenderEngine> NativeFormatter<E> {
    /// Creates a new `NativeFormatter` that renders with `engine`.
    pub fn new_with_engine(engine: E, format: &str) -> Self {
        Self {
            engine,
            format: String::from(format),
            kinds: resolve_native_format(format),
        }
    }

    /// Returns the rendering engine.
    #[inline]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Replaces the rendering engine.
    pub fn with_engine<F: RenderEngine>(self, engine: F) -> NativeFormatter<F> {
        NativeFormatter {
            engine,
            format: self.format,
            kinds: self.kinds,
        }
    }

    /// Returns the format string this formatter renders.
    #[inline]
    pub fn format_string(&self) -> &str {
        &self.format
    }
}

impl<E: RenderEngine> DateTimeFormatter for NativeFormatter<E> {
    fn accepted_kinds(&self) -> TemporalKinds {
        self.kinds
    }

    fn format(&self, context: &FormatContext) -> FormatResult<String> {
        check_kind(self.kinds, context.kind(), &self.format)?;
        delegate(&self.engine, &self.format, None, context)
    }
}
