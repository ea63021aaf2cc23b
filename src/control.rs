//! Form control descriptors.
//!
//! A form is modeled as an ordered collection of [`FormControl`] values, one
//! per named input. The collection is a read-only snapshot: extraction never
//! mutates it, and repeated extractions over the same snapshot are
//! independent.
//!
//! Descriptors are plain data. Builder-style constructors cover the common
//! shapes:
//!
//! ```
//! use form_json::{FormControl, SelectOption};
//!
//! let user = FormControl::text("user", "alice");
//! let agree = FormControl::checkbox("agree", "yes").checked();
//! let tags = FormControl::select("tags")
//!     .multiple()
//!     .with_option(SelectOption::new("a").selected())
//!     .with_option(SelectOption::new("b"));
//! ```

use crate::error::{Error, Result};
use bytes::Bytes;
use std::path::PathBuf;

/// Control type, mirroring the fixed set of form input kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlType {
    /// Text-like input (text, email, number, hidden, textarea, ...)
    Text,
    /// Checkbox input
    Checkbox,
    /// Radio button
    Radio,
    /// Selection list (single or multiple, per the `multiple` flag)
    Select,
    /// File input
    File,
}

/// One option of a [`ControlType::Select`] control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Option value submitted when selected
    pub value: String,
    /// Whether the option is currently selected
    pub selected: bool,
}

impl SelectOption {
    /// Create an unselected option.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            selected: false,
        }
    }

    /// Mark the option as selected.
    pub fn selected(mut self) -> Self {
        self.selected = true;
        self
    }
}

/// Content source of a [`FormFile`].
#[derive(Debug, Clone)]
pub enum FileSource {
    /// Content held in memory
    Memory(Bytes),
    /// Content read from the filesystem on demand
    Path(PathBuf),
}

/// A file attached to a [`ControlType::File`] control.
///
/// The content is either held in memory or read lazily from a path; either
/// way the only observable outcomes are the resolved bytes or a read error.
#[derive(Debug, Clone)]
pub struct FormFile {
    /// File name as presented by the form
    pub file_name: String,
    /// Media type (e.g. `image/png`); empty means unknown
    pub media_type: String,
    /// Where the content comes from
    pub source: FileSource,
}

impl FormFile {
    /// Create a file descriptor from in-memory content.
    pub fn from_bytes(
        file_name: impl Into<String>,
        media_type: impl Into<String>,
        content: impl Into<Bytes>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: media_type.into(),
            source: FileSource::Memory(content.into()),
        }
    }

    /// Create a file descriptor backed by a filesystem path.
    ///
    /// The file name is taken from the final path component; the media type
    /// is left empty unless set with [`FormFile::with_media_type`].
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            file_name,
            media_type: String::new(),
            source: FileSource::Path(path),
        }
    }

    /// Set the media type.
    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = media_type.into();
        self
    }

    /// Read the file content.
    ///
    /// In-memory content resolves immediately; path-backed content is read
    /// via the async filesystem. Fails with [`Error::FileRead`] carrying the
    /// underlying I/O error.
    pub async fn read(&self) -> Result<Bytes> {
        match &self.source {
            FileSource::Memory(bytes) => Ok(bytes.clone()),
            FileSource::Path(path) => {
                let content = tokio::fs::read(path).await.map_err(|source| Error::FileRead {
                    name: self.file_name.clone(),
                    source,
                })?;
                Ok(Bytes::from(content))
            },
        }
    }
}

/// A form control descriptor.
///
/// Fields not applicable to a control type are left at their defaults
/// (`checked` is only meaningful for checkboxes and radios, `options` for
/// selects, `files` and `multiple` for file inputs and selects).
#[derive(Debug, Clone)]
pub struct FormControl {
    /// Field name; may repeat across controls of the same kind
    pub name: String,
    /// Control type
    pub control_type: ControlType,
    /// Scalar value (text content, or checkbox/radio export value)
    pub value: String,
    /// Checked state for checkboxes and radios
    pub checked: bool,
    /// Options for select controls, in display order
    pub options: Vec<SelectOption>,
    /// Whether the control accepts multiple values (selects and file inputs)
    pub multiple: bool,
    /// Attached files for file controls, in selection order
    pub files: Vec<FormFile>,
}

impl FormControl {
    fn new(name: impl Into<String>, control_type: ControlType, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            control_type,
            value: value.into(),
            checked: false,
            options: Vec::new(),
            multiple: false,
            files: Vec::new(),
        }
    }

    /// Create a text-like control.
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, ControlType::Text, value)
    }

    /// Create an unchecked checkbox with the given export value.
    pub fn checkbox(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, ControlType::Checkbox, value)
    }

    /// Create an unchecked radio button with the given export value.
    pub fn radio(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, ControlType::Radio, value)
    }

    /// Create a select control with no options.
    pub fn select(name: impl Into<String>) -> Self {
        Self::new(name, ControlType::Select, "")
    }

    /// Create a file control with no attached files.
    pub fn file(name: impl Into<String>) -> Self {
        Self::new(name, ControlType::File, "")
    }

    /// Mark the control as checked.
    pub fn checked(mut self) -> Self {
        self.checked = true;
        self
    }

    /// Set the checked state.
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Allow multiple values (multi-select or multi-file).
    pub fn multiple(mut self) -> Self {
        self.multiple = true;
        self
    }

    /// Append an option (select controls).
    pub fn with_option(mut self, option: SelectOption) -> Self {
        self.options.push(option);
        self
    }

    /// Append several options (select controls).
    pub fn with_options(mut self, options: impl IntoIterator<Item = SelectOption>) -> Self {
        self.options.extend(options);
        self
    }

    /// Attach a file (file controls).
    pub fn with_file(mut self, file: FormFile) -> Self {
        self.files.push(file);
        self
    }

    /// Attach several files (file controls).
    pub fn with_files(mut self, files: impl IntoIterator<Item = FormFile>) -> Self {
        self.files.extend(files);
        self
    }

    /// The value this control contributes when treated as a scalar.
    ///
    /// For selects this is the value of the first selected option (empty
    /// when nothing is selected), matching how a form reports the value of
    /// a selection list. All other controls report their `value` field.
    pub fn effective_value(&self) -> &str {
        match self.control_type {
            ControlType::Select => self
                .options
                .iter()
                .find(|opt| opt.selected)
                .map(|opt| opt.value.as_str())
                .unwrap_or(""),
            _ => &self.value,
        }
    }

    /// Values of all selected options, in option order.
    pub fn selected_values(&self) -> Vec<String> {
        self.options
            .iter()
            .filter(|opt| opt.selected)
            .map(|opt| opt.value.clone())
            .collect()
    }
}
