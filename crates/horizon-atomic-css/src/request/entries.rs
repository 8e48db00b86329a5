//! Ordered shorthand entries for one element.

use crate::types::{ShorthandKey, StyleValue};
use crate::Result;

/// Shorthand entries describing one element's styling.
///
/// Entries keep the order in which keys were first set, which is the order
/// class names come back from the engine. Setting a key again replaces its
/// value without moving it. An entry may be recorded with no value; the
/// engine skips it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleRequest {
    entries: Vec<(ShorthandKey, Option<StyleValue>)>,
}

impl StyleRequest {
    /// Create an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or clear the value for a key.
    ///
    /// The value is not checked against the key here; a mismatched kind is
    /// reported by the engine as an invalid value.
    pub fn set(&mut self, key: ShorthandKey, value: impl Into<Option<StyleValue>>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, key: ShorthandKey, value: impl Into<Option<StyleValue>>) -> Self {
        self.set(key, value);
        self
    }

    /// Parse a request from untyped `(key, value)` pairs.
    ///
    /// Fails with [`Error::UnknownKey`](crate::Error::UnknownKey) for a key
    /// outside the shorthand set, or
    /// [`Error::InvalidValue`](crate::Error::InvalidValue) for a value the
    /// key does not accept.
    ///
    /// Every pair carries a value. An unset entry is expressed by leaving
    /// its key out of `pairs`; there is no empty-value spelling for it, so an
    /// empty string is rejected like any other out-of-set token.
    pub fn parse_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut request = Self::new();
        for (key, raw) in pairs {
            let parsed = key.as_ref().parse::<ShorthandKey>().and_then(|key| {
                StyleValue::parse_for(key, raw.as_ref()).map(|value| (key, value))
            });
            match parsed {
                Ok((key, value)) => request.set(key, value),
                Err(err) => {
                    tracing::warn!("Rejected style entry: {}", err);
                    return Err(err);
                }
            }
        }
        Ok(request)
    }

    /// Present entries, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ShorthandKey, StyleValue)> + '_ {
        self.entries
            .iter()
            .filter_map(|(key, value)| value.map(|v| (*key, v)))
    }

    /// Value recorded for a key, if present.
    pub fn get(&self, key: ShorthandKey) -> Option<StyleValue> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .and_then(|(_, value)| *value)
    }

    /// Number of present entries.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Check if no entry carries a value.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
