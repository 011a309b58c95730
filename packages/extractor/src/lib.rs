//! Doc-number extraction from patent XML.
//!
//! This crate pulls `doc-number` values out of `document-id` elements and
//! orders them by the element's `format` attribute: `epo` first, then
//! `patent-office`, then everything else. Input may be a single XML
//! document or free text with `<root>...</root>` blocks embedded in it.
//!
//! # Example
//!
//! ```
//! use docnumber_extractor::extract_doc_numbers;
//!
//! let text = r#"Report for two filings:
//! <root><document-id format="patent-office"><doc-number>B</doc-number></document-id></root>
//! and
//! <root><document-id format="epo"><doc-number>A</doc-number></document-id></root>"#;
//!
//! assert_eq!(extract_doc_numbers(text).unwrap(), ["A", "B"]);
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Element names, fragment markers and exit codes
//! - [`types`]: Format buckets and extracted entries
//! - [`error`]: Error types and Result alias
//! - [`xml`]: Depth-first tree-walk helpers
//! - [`fragment`]: Locating XML fragments in free text
//! - [`extractor`]: Parsing, classification and merging
//! - [`input`]: File reading with encoding fallback
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod fragment;
pub mod input;
pub mod types;
pub mod xml;

// Re-export main functions
pub use extractor::{extract_doc_number_entries, extract_doc_numbers};
pub use fragment::locate_fragments;
pub use input::{extract_doc_numbers_from_file, read_xml_file};

// Re-export commonly used items
pub use error::{ExtractorError, Result};
pub use types::{DocNumberEntry, FormatBucket};
