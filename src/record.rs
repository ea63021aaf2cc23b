//! Extraction result records.
//!
//! A [`FormRecord`] is a flat, insertion-ordered mapping from field name to
//! [`FieldValue`]. Values are either a single string or an ordered sequence
//! of strings (multi-checkbox groups, multi-selects, multi-file inputs).
//!
//! Records serialize directly to the JSON shape callers expect from form
//! submission payloads:
//!
//! ```
//! use form_json::{FieldValue, FormRecord};
//!
//! let mut record = FormRecord::new();
//! record.insert("user", FieldValue::from("alice"));
//! record.insert("tags", FieldValue::from(vec!["x".to_string()]));
//!
//! let json = serde_json::to_string(&record).unwrap();
//! assert_eq!(json, r#"{"user":"alice","tags":["x"]}"#);
//! ```

use crate::error::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Value of a single record field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Single string value
    Text(String),
    /// Ordered multi-value group
    Array(Vec<String>),
}

impl FieldValue {
    /// Get as text, if this is a single value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get as a value sequence, if this is a multi-value group.
    pub fn as_array(&self) -> Option<&[String]> {
        match self {
            FieldValue::Array(v) => Some(v),
            _ => None,
        }
    }

    /// Check whether this is a multi-value group.
    pub fn is_array(&self) -> bool {
        matches!(self, FieldValue::Array(_))
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(values: Vec<String>) -> Self {
        FieldValue::Array(values)
    }
}

/// A flat mapping from field name to extracted value.
///
/// Field order follows first insertion, so serialized output preserves the
/// collection order of the form controls that produced it. Each extraction
/// call produces a fresh record; records hold no reference back to the
/// form they came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormRecord {
    fields: IndexMap<String, FieldValue>,
}

impl FormRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a field by name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Look up a field by name, mutably.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut FieldValue> {
        self.fields.get_mut(name)
    }

    /// Set a field value, replacing any existing value under the name.
    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.insert(name.into(), value);
    }

    /// Check whether a field is present.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of fields in the record.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.fields.iter()
    }

    /// Serialize the record to a compact JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<'a> IntoIterator for &'a FormRecord {
    type Item = (&'a String, &'a FieldValue);
    type IntoIter = indexmap::map::Iter<'a, String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
