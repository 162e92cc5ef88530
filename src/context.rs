//! The per-value field store handed to formatters.

use alloc::{
    collections::{BTreeMap, VecDeque},
    format,
    string::String,
};

use jiff::{
    civil::{Date, DateTime, Time},
    Zoned,
};

use crate::{
    fields::{extract_fields, FieldKey},
    FormatError, FormatResult, TemporalKind, TemporalValue,
};

/// `FormatContext` holds the source value of a format operation together
/// with a queue of extracted values for every named field.
///
/// Reads pop: a field added twice can be consumed exactly twice.
///
/// NOTE: `IcuFormatter` and `NativeFormatter` only read [`FormatContext::value`]
/// and leave the field queues untouched. The queues are kept for
/// field-by-field renderers.
#[derive(Debug, Clone)]
pub struct FormatContext {
    value: TemporalValue,
    fields: BTreeMap<FieldKey, VecDeque<String>>,
}

impl FormatContext {
    /// Builds a context from `value`, queueing every field the value's shape
    /// carries.
    pub fn new(value: TemporalValue) -> Self {
        let mut context = Self {
            value,
            fields: BTreeMap::new(),
        };
        for (key, field) in extract_fields(&context.value) {
            context.add_field(key, field);
        }
        context
    }

    /// Returns the source value.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &TemporalValue {
        &self.value
    }

    /// Returns the kind of the source value.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> TemporalKind {
        self.value.kind()
    }

    /// Appends `value` to the queue of `key`.
    pub fn add_field(&mut self, key: FieldKey, value: impl Into<String>) {
        self.fields.entry(key).or_default().push_back(value.into());
    }

    /// Returns whether `key` has a queued value.
    pub fn has_field(&self, key: FieldKey) -> bool {
        self.fields.get(&key).is_some_and(|queue| !queue.is_empty())
    }

    /// Pops the oldest queued value of `key`.
    pub fn get_field(&mut self, key: FieldKey) -> FormatResult<String> {
        self.fields
            .get_mut(&key)
            .and_then(VecDeque::pop_front)
            .ok_or_else(|| {
                FormatError::field_not_present().with_message(format!("{key} is not present"))
            })
    }

    /// Pops the oldest queued value of `key`, or returns an empty string.
    ///
    /// Use [`FormatContext::has_field`] to tell an absent field from an empty one.
    pub fn get_optional_field(&mut self, key: FieldKey) -> String {
        self.fields
            .get_mut(&key)
            .and_then(VecDeque::pop_front)
            .unwrap_or_default()
    }

    /// Pops the oldest queued value of the field called `name`.
    ///
    /// Names outside the field vocabulary are never present.
    pub fn get_field_by_name(&mut self, name: &str) -> FormatResult<String> {
        let key = name.parse::<FieldKey>().map_err(|_| {
            FormatError::field_not_present().with_message(format!("{name} is not present"))
        })?;
        self.get_field(key)
    }

    /// Pops the oldest queued value of the field called `name`, or returns an
    /// empty string.
    pub fn get_optional_field_by_name(&mut self, name: &str) -> String {
        name.parse::<FieldKey>()
            .map(|key| self.get_optional_field(key))
            .unwrap_or_default()
    }

    /// Returns the number of queued values for `key`.
    pub fn queued(&self, key: FieldKey) -> usize {
        self.fields.get(&key).map_or(0, VecDeque::len)
    }
}

impl From<TemporalValue> for FormatContext {
    fn from(value: TemporalValue) -> Self {
        Self::new(value)
    }
}

impl From<Date> for FormatContext {
    fn from(value: Date) -> Self {
        Self::new(value.into())
    }
}

impl From<Time> for FormatContext {
    fn from(value: Time) -> Self {
        Self::new(value.into())
    }
}

impl From<DateTime> for FormatContext {
    fn from(value: DateTime) -> Self {
        Self::new(value.into())
    }
}

impl From<Zoned> for FormatContext {
    fn from(value: Zoned) -> Self {
        Self::new(value.into())
    }
}
