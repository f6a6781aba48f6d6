//! Structured key-value fields attached to a logger
//!
//! Fields keep insertion order and allow duplicate keys, so a child logger
//! renders its parent's fields first and its own after them.

use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Ordered list of fields shared between a logger and the entries it emits.
///
/// Cloning is cheap: the list sits behind an `Arc` and is only copied when a
/// child logger appends to it.
#[derive(Debug, Clone, Default)]
pub struct Fields {
    entries: Arc<Vec<(String, Value)>>,
}

impl Fields {
    /// Create an empty field list
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert any serializable value into a field value.
    ///
    /// Values serde cannot represent are kept as a string describing the
    /// failure rather than dropped.
    pub fn value_of<V: Serialize + ?Sized>(value: &V) -> Value {
        serde_json::to_value(value)
            .unwrap_or_else(|e| Value::String(format!("<unserializable: {}>", e)))
    }

    /// Return a copy of this list with one more field
    #[must_use]
    pub fn with_field<K, V>(&self, key: K, value: &V) -> Self
    where
        K: Into<String>,
        V: Serialize + ?Sized,
    {
        self.extended(std::iter::once((key.into(), Self::value_of(value))))
    }

    /// Return a copy of this list with the given fields appended in order
    #[must_use]
    pub fn extended<I>(&self, fields: I) -> Self
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        let mut entries = Vec::clone(&self.entries);
        entries.extend(fields);
        Self {
            entries: Arc::new(entries),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as a JSON object with `": "` and `", "` separators,
    /// e.g. `{"error": "some error", "attempt": 3}`
    pub fn encode(&self) -> String {
        let mut out = String::from("{");
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            // serializing a &str or a Value cannot fail
            out.push_str(&serde_json::to_string(key).unwrap_or_default());
            out.push_str(": ");
            out.push_str(&serde_json::to_string(value).unwrap_or_default());
        }
        out.push('}');
        out
    }
}

impl fmt::Display for Fields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}
