//! JSON export for extracted form records.
//!
//! Writes a [`FormRecord`] out as a JSON document, for batch processing or
//! handing form submissions to other tools. Transmission of the encoded
//! record stays the caller's responsibility.
//!
//! # Example
//!
//! ```ignore
//! use form_json::{FormExtractor, JsonWriter};
//!
//! let record = extractor.extract();
//! JsonWriter::from_record(record).pretty().write_to_file("submission.json")?;
//! ```

use crate::error::Result;
use crate::record::FormRecord;
use std::path::Path;

/// JSON file writer for form records.
#[derive(Debug, Default)]
pub struct JsonWriter {
    record: FormRecord,
    pretty: bool,
}

impl JsonWriter {
    /// Create a writer for an extracted record.
    pub fn from_record(record: FormRecord) -> Self {
        Self {
            record,
            pretty: false,
        }
    }

    /// Emit pretty-printed JSON instead of the compact form.
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Generate the JSON document as bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(&self.record)?
        } else {
            serde_json::to_vec(&self.record)?
        };
        Ok(bytes)
    }

    /// Generate the JSON document as a string.
    pub fn to_string(&self) -> Result<String> {
        let bytes = self.to_bytes()?;
        Ok(String::from_utf8_lossy(&bytes).to_string())
    }

    /// Write the JSON document to a file.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path.as_ref(), bytes)?;
        Ok(())
    }
}
