//! Invoice data sources.
//!
//! A [`Source`] is one decoded data file in one of two shapes:
//!
//! - [`Source::Table`]: flat rows from a CSV file
//! - [`Source::Document`]: parsed JSON, either `{"invoices": [...]}` or a bare list
//!
//! The [`Locator`] lists the identifiers a source carries and extracts one
//! record as a [`NormalizedRecord`].
//!
//! ## Example
//!
//! ```ignore
//! use invoicer_source::{Source, get_record, list_identifiers};
//! use serde_json::json;
//!
//! let source = Source::Document(json!({"invoices": [{"id": "X1", "amount": "10"}]}));
//! assert_eq!(list_identifiers(&source), vec!["X1"]);
//! let record = get_record(&source, "X1").unwrap();
//! assert_eq!(record.amount(), "10");
//! ```

mod error;
mod locator;
mod record;
mod table;

pub use error::SourceError;
pub use locator::{Locator, LocatorConfig, get_record, list_identifiers};
pub use record::{NormalizedRecord, PLACEHOLDER, fields, scalar_text};
pub use table::SourceTable;

use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// A decoded data file.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    Table(SourceTable),
    Document(Value),
}

impl Source {
    /// Decodes a file, choosing the parser by extension (`.csv` or `.json`,
    /// case-insensitive).
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        let open = || {
            File::open(path)
                .map(BufReader::new)
                .map_err(|source| SourceError::Io {
                    path: path.to_path_buf(),
                    source,
                })
        };

        let source = match extension.as_deref() {
            Some("csv") => Self::from_csv_reader(open()?)?,
            Some("json") => Self::from_json_reader(open()?)?,
            _ => return Err(SourceError::UnsupportedFormat(path.to_path_buf())),
        };
        log::info!("Loaded {} source from {}", source.kind(), path.display());
        Ok(source)
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, SourceError> {
        SourceTable::from_csv_reader(reader).map(Source::Table)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, SourceError> {
        Ok(Source::Document(serde_json::from_reader(reader)?))
    }

    pub fn from_json_str(json: &str) -> Result<Self, SourceError> {
        Ok(Source::Document(serde_json::from_str(json)?))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Source::Table(_) => "table",
            Source::Document(_) => "document",
        }
    }
}
