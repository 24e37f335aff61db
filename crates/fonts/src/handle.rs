//! The font value carried by every layout block.

use crate::error::FontError;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Average advance of the builtin face, in em units.
///
/// Helvetica has no metrics available without the AFM tables, so measurement
/// falls back to a fixed average that slightly over-estimates digits and
/// lowercase text.
const BUILTIN_AVERAGE_ADVANCE: f32 = 0.55;

/// Standard PDF faces that every viewer provides without embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinFace {
    Helvetica,
}

impl BuiltinFace {
    pub fn postscript_name(&self) -> &'static str {
        match self {
            BuiltinFace::Helvetica => "Helvetica",
        }
    }
}

/// Font bytes loaded from disk or the system font database.
pub struct EmbeddedFont {
    pub name: String,
    pub path: PathBuf,
    pub index: u32,
    pub data: Arc<Vec<u8>>,
}

impl std::fmt::Debug for EmbeddedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddedFont")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("index", &self.index)
            .field("data_len", &self.data.len())
            .finish()
    }
}

impl EmbeddedFont {
    /// Validates `data` as a TrueType/OpenType face and reads its PostScript name.
    ///
    /// The file stem of `path` is used when the face carries no readable name.
    pub fn from_bytes(path: &Path, data: Vec<u8>, index: u32) -> Result<Self, FontError> {
        let name = {
            let face = ttf_parser::Face::parse(&data, index)
                .map_err(|e| FontError::Parse(path.to_path_buf(), e.to_string()))?;
            face.names()
                .into_iter()
                .filter(|n| n.name_id == ttf_parser::name_id::POST_SCRIPT_NAME)
                .find_map(|n| n.to_string())
        };
        let name = name.unwrap_or_else(|| {
            path.file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "EmbeddedFont".to_string())
        });

        Ok(Self {
            name,
            path: path.to_path_buf(),
            index,
            data: Arc::new(data),
        })
    }

    /// Creates a lightweight Face view over the font data.
    pub fn as_face(&self) -> Option<ttf_parser::Face<'_>> {
        ttf_parser::Face::parse(&self.data, self.index).ok()
    }
}

/// A resolved font face, cheap to clone and shared by every block of a document.
#[derive(Debug, Clone)]
pub enum FontHandle {
    Embedded(Arc<EmbeddedFont>),
    Builtin(BuiltinFace),
}

impl PartialEq for FontHandle {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FontHandle::Embedded(a), FontHandle::Embedded(b)) => {
                a.name == b.name && a.path == b.path && a.index == b.index
            }
            (FontHandle::Builtin(a), FontHandle::Builtin(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for FontHandle {}

impl FontHandle {
    pub fn builtin() -> Self {
        FontHandle::Builtin(BuiltinFace::Helvetica)
    }

    pub fn name(&self) -> &str {
        match self {
            FontHandle::Embedded(font) => &font.name,
            FontHandle::Builtin(face) => face.postscript_name(),
        }
    }

    pub fn is_embedded(&self) -> bool {
        matches!(self, FontHandle::Embedded(_))
    }

    /// Returns the first character of `text` the face has no glyph for.
    ///
    /// Whitespace and control characters are never reported.
    pub fn first_unsupported(&self, text: &str) -> Option<char> {
        let mut printable = text.chars().filter(|c| !c.is_whitespace() && !c.is_control());
        match self {
            FontHandle::Embedded(font) => match font.as_face() {
                Some(face) => printable.find(|c| face.glyph_index(*c).is_none()),
                None => printable.next(),
            },
            FontHandle::Builtin(_) => printable.find(|c| !is_latin1(*c)),
        }
    }

    pub fn supports(&self, text: &str) -> bool {
        self.first_unsupported(text).is_none()
    }

    /// Advance width of `text` set at `size` points.
    pub fn measure(&self, text: &str, size: f32) -> f32 {
        match self {
            FontHandle::Embedded(font) => {
                let Some(face) = font.as_face() else {
                    return builtin_width(text, size);
                };
                let units_per_em = face.units_per_em().max(1) as f32;
                let fallback = face
                    .glyph_hor_advance(ttf_parser::GlyphId(0))
                    .unwrap_or((units_per_em * BUILTIN_AVERAGE_ADVANCE) as u16);
                let units: u32 = text
                    .chars()
                    .map(|c| {
                        face.glyph_index(c)
                            .and_then(|id| face.glyph_hor_advance(id))
                            .unwrap_or(fallback) as u32
                    })
                    .sum();
                units as f32 * size / units_per_em
            }
            FontHandle::Builtin(_) => builtin_width(text, size),
        }
    }
}

fn builtin_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * BUILTIN_AVERAGE_ADVANCE * size
}

/// Characters the builtin faces can encode (WinAnsi is a Latin-1 superset).
pub fn is_latin1(c: char) -> bool {
    (c as u32) <= 0xFF
}
