//! # form_json
//!
//! Extract interactive form data into flat JSON records.
//!
//! ## Core Features
//!
//! - **Record Extraction**: ordered walk over a snapshot of form controls,
//!   producing a flat name→value mapping with last-write-wins semantics
//! - **Multi-Value Groups**: checkbox groups and multi-selects come out as
//!   ordered string sequences; a name shared by several checkboxes is a
//!   group even when only one is checked
//! - **File Encoding**: file inputs are folded in asynchronously as base64
//!   `data:` URIs, accumulated per field name in deterministic order
//! - **JSON Export**: records serialize directly with serde, or go to disk
//!   via [`JsonWriter`]
//!
//! ## Quick Start
//!
//! ```
//! use form_json::{FormControl, FormExtractor, SelectOption};
//!
//! let extractor = FormExtractor::new(vec![
//!     FormControl::text("user", "alice"),
//!     FormControl::checkbox("tags", "x").checked(),
//!     FormControl::checkbox("tags", "y"),
//!     FormControl::select("interests")
//!         .multiple()
//!         .with_option(SelectOption::new("music").selected())
//!         .with_option(SelectOption::new("art")),
//! ]);
//!
//! let record = extractor.extract();
//! assert_eq!(
//!     serde_json::to_string(&record).unwrap(),
//!     r#"{"user":"alice","tags":["x"],"interests":["music"]}"#
//! );
//! ```
//!
//! File fields need an async runtime for the sequential reads:
//!
//! ```ignore
//! let record = extractor.extract_with_files().await?;
//! ```
//!
//! ## License
//!
//! Licensed under either of the Apache License, Version 2.0 or the MIT
//! license, at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Form control model
pub mod control;

// Extraction
pub mod extractor;
pub mod record;

// File encoding
pub mod data_uri;

// Export
pub mod json;

pub use control::{ControlType, FileSource, FormControl, FormFile, SelectOption};
pub use error::{Error, Result};
pub use extractor::FormExtractor;
pub use json::JsonWriter;
pub use record::{FieldValue, FormRecord};
