//! Form record extraction.
//!
//! [`FormExtractor`] walks an ordered snapshot of form controls and builds a
//! flat [`FormRecord`]. Ordinary fields are handled synchronously by
//! [`FormExtractor::extract`]; file inputs are folded in by the async
//! [`FormExtractor::extract_with_files`], which encodes each attached file
//! as a base64 data URI.
//!
//! # Example
//!
//! ```
//! use form_json::{FormControl, FormExtractor};
//!
//! let extractor = FormExtractor::new(vec![
//!     FormControl::text("user", "alice"),
//!     FormControl::checkbox("tags", "x").checked(),
//!     FormControl::checkbox("tags", "y"),
//! ]);
//!
//! let record = extractor.extract();
//! assert_eq!(record.get("user").and_then(|v| v.as_text()), Some("alice"));
//! // "tags" names two checkboxes, so its value is a group even though
//! // only one is checked.
//! assert_eq!(record.get("tags").and_then(|v| v.as_array()), Some(&["x".to_string()][..]));
//! ```

use crate::control::{ControlType, FormControl};
use crate::data_uri;
use crate::error::Result;
use crate::record::{FieldValue, FormRecord};
use indexmap::map::Entry;
use indexmap::IndexMap;

/// Walks a form's control collection and produces flat records.
///
/// The control collection is captured once at construction and treated as
/// read-only; every extraction call returns a fresh record.
pub struct FormExtractor {
    controls: Vec<FormControl>,
}

impl FormExtractor {
    /// Create an extractor over a snapshot of form controls.
    pub fn new(controls: Vec<FormControl>) -> Self {
        Self { controls }
    }

    /// The control snapshot this extractor walks.
    pub fn controls(&self) -> &[FormControl] {
        &self.controls
    }

    /// Extract all non-file fields into a record.
    ///
    /// Controls are visited in collection order. Controls with an empty
    /// name or value, unchecked checkboxes and radios, and file inputs are
    /// skipped. A name owned by two or more checkbox controls always
    /// produces a value group; any other duplicate name resolves to the
    /// last written value.
    ///
    /// This path performs no I/O and cannot fail.
    pub fn extract(&self) -> FormRecord {
        let mut record = FormRecord::new();

        for control in &self.controls {
            if !Self::is_valid_element(control)
                || !Self::is_valid_value(control)
                || Self::is_file(control)
            {
                log::debug!("Skipping control '{}'", control.name);
                continue;
            }

            if Self::is_checkbox(control) {
                if self.has_many_checkboxes(&control.name) {
                    if !matches!(record.get(&control.name), Some(FieldValue::Array(_))) {
                        record.insert(control.name.clone(), FieldValue::Array(Vec::new()));
                    }
                    if let Some(FieldValue::Array(values)) = record.get_mut(&control.name) {
                        values.push(control.value.clone());
                    }
                } else {
                    record.insert(control.name.clone(), FieldValue::Text(control.value.clone()));
                }
            } else if Self::is_multi_select(control) {
                record.insert(control.name.clone(), FieldValue::Array(control.selected_values()));
            } else {
                record.insert(
                    control.name.clone(),
                    FieldValue::Text(control.effective_value().to_string()),
                );
            }
        }

        record
    }

    /// Extract all fields, encoding attached files as base64 data URIs.
    ///
    /// Builds the synchronous record first, then encodes files strictly
    /// sequentially: controls in collection order, files within a
    /// `multiple` control in their attached order. A control without the
    /// `multiple` flag contributes only its first attached file. Encoded
    /// files accumulate per field name (one file yields a single string,
    /// further files under the same name promote the entry to a group) and
    /// finally overwrite any non-file field sharing the name.
    ///
    /// The first failed file read aborts the remaining encodings and
    /// returns that error; no partial file fields are merged.
    pub async fn extract_with_files(&self) -> Result<FormRecord> {
        let mut record = self.extract();
        let mut store = FileStore::default();

        for control in self.controls.iter().filter(|c| Self::is_file(c)) {
            if control.multiple {
                for file in &control.files {
                    log::debug!("Encoding file '{}' for field '{}'", file.file_name, control.name);
                    let uri = data_uri::encode(file).await?;
                    store.add(&control.name, uri);
                }
            } else if let Some(file) = control.files.first() {
                log::debug!("Encoding file '{}' for field '{}'", file.file_name, control.name);
                let uri = data_uri::encode(file).await?;
                store.add(&control.name, uri);
            }
        }

        store.merge_into(&mut record);
        Ok(record)
    }

    /// Whether two or more checkbox controls in the collection share `name`.
    fn has_many_checkboxes(&self, name: &str) -> bool {
        self.controls
            .iter()
            .filter(|c| Self::is_checkbox(c) && c.name == name)
            .nth(1)
            .is_some()
    }

    /// A control contributes a field only with a non-empty name and value.
    fn is_valid_element(control: &FormControl) -> bool {
        !control.name.is_empty() && !control.effective_value().is_empty()
    }

    /// Unchecked checkboxes and radios carry no submittable value.
    fn is_valid_value(control: &FormControl) -> bool {
        !matches!(control.control_type, ControlType::Checkbox | ControlType::Radio)
            || control.checked
    }

    fn is_checkbox(control: &FormControl) -> bool {
        control.control_type == ControlType::Checkbox
    }

    fn is_multi_select(control: &FormControl) -> bool {
        control.control_type == ControlType::Select && control.multiple
    }

    fn is_file(control: &FormControl) -> bool {
        control.control_type == ControlType::File
    }
}

/// Per-call accumulator for encoded files, keyed by field name.
///
/// Lives only for the duration of one `extract_with_files` call; nothing is
/// shared across invocations.
#[derive(Default)]
struct FileStore {
    entries: IndexMap<String, FieldValue>,
}

impl FileStore {
    /// Accumulate one encoded file under `name`.
    ///
    /// The first file for a name is stored as a bare string; the second
    /// promotes the entry to a two-element group; later files append.
    fn add(&mut self, name: &str, data_uri: String) {
        match self.entries.entry(name.to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(FieldValue::Text(data_uri));
            },
            Entry::Occupied(mut slot) => {
                let value = slot.get_mut();
                let previous = std::mem::replace(value, FieldValue::Array(Vec::new()));
                *value = match previous {
                    FieldValue::Text(first) => FieldValue::Array(vec![first, data_uri]),
                    FieldValue::Array(mut values) => {
                        values.push(data_uri);
                        FieldValue::Array(values)
                    },
                };
            },
        }
    }

    /// Merge accumulated file fields into `record`, overwriting same-name
    /// entries.
    fn merge_into(self, record: &mut FormRecord) {
        for (name, value) in self.entries {
            record.insert(name, value);
        }
    }
}
