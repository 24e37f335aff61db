use std::path::PathBuf;
use thiserror::Error;

/// Why a font candidate could not be registered.
///
/// These never leave the resolver: every failure degrades to the builtin face.
#[derive(Error, Debug)]
pub enum FontError {
    #[error("Font file '{0}' could not be read: {1}")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Font file '{0}' is not a usable face: {1}")]
    Parse(PathBuf, String),

    #[error("Font '{name}' has no glyph for {missing:?}")]
    MissingGlyph { name: String, missing: char },

    #[error("No installed font matches family '{0}'")]
    NotInstalled(String),
}
