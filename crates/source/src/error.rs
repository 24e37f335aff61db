use std::path::PathBuf;
use thiserror::Error;

/// Failures while decoding a data file into a [`crate::Source`].
///
/// A source that decodes but has an unexpected shape is not an error; the
/// locator simply finds no identifiers in it.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("I/O error reading '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported data file '{0}': expected a .csv or .json extension")]
    UnsupportedFormat(PathBuf),
}
