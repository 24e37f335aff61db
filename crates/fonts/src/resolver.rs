use crate::error::FontError;
use crate::handle::{EmbeddedFont, FontHandle};
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

/// Glyphs a candidate face must cover to be chosen over the builtin face.
pub const REQUIRED_GLYPHS: &str =
    "0123456789АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯабвгдеёжзийклмнопрстуфхцчшщъыьэюя₽";

static RESOLVED: OnceLock<FontHandle> = OnceLock::new();

/// Resolves the document font for this process.
///
/// The first call walks [`platform_candidates`]; later calls return the same
/// handle without touching the filesystem.
pub fn resolve_font() -> FontHandle {
    RESOLVED
        .get_or_init(|| {
            let font = FontResolver::platform().resolve();
            log::info!("Using font '{}' for document text", font.name());
            font
        })
        .clone()
}

/// One strategy for locating a usable face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontCandidate {
    /// A font file at a fixed location.
    Path(PathBuf),
    /// A family looked up in the system font database.
    #[cfg(feature = "system-fonts")]
    SystemFamily(String),
}

/// Well-known font locations for the current platform, in priority order.
pub fn platform_candidates() -> Vec<FontCandidate> {
    let paths: &[&str] = if cfg!(windows) {
        &[
            "C:/Windows/Fonts/arial.ttf",
            "C:/Windows/Fonts/calibri.ttf",
            "C:/Windows/Fonts/tahoma.ttf",
        ]
    } else {
        &[
            "/System/Library/Fonts/Arial.ttf",
            "/System/Library/Fonts/Supplemental/Arial.ttf",
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
            "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        ]
    };

    #[allow(unused_mut)]
    let mut candidates: Vec<FontCandidate> = paths
        .iter()
        .map(|p| FontCandidate::Path(PathBuf::from(p)))
        .collect();

    #[cfg(feature = "system-fonts")]
    candidates.extend(
        ["DejaVu Sans", "Liberation Sans", "Arial", "Noto Sans"]
            .iter()
            .map(|family| FontCandidate::SystemFamily(family.to_string())),
    );

    candidates
}

/// Evaluates font candidates in order and falls back to the builtin face.
#[derive(Debug, Clone)]
pub struct FontResolver {
    candidates: Vec<FontCandidate>,
    required_glyphs: String,
}

impl FontResolver {
    pub fn new(candidates: Vec<FontCandidate>) -> Self {
        Self {
            candidates,
            required_glyphs: REQUIRED_GLYPHS.to_string(),
        }
    }

    /// A resolver over [`platform_candidates`].
    pub fn platform() -> Self {
        Self::new(platform_candidates())
    }

    pub fn with_required_glyphs(mut self, glyphs: impl Into<String>) -> Self {
        self.required_glyphs = glyphs.into();
        self
    }

    /// Returns the first candidate that registers, or the builtin face.
    pub fn resolve(&self) -> FontHandle {
        #[cfg(feature = "system-fonts")]
        let mut system_db: Option<fontdb::Database> = None;

        for candidate in &self.candidates {
            let attempt = match candidate {
                FontCandidate::Path(path) => load_path(path),
                #[cfg(feature = "system-fonts")]
                FontCandidate::SystemFamily(family) => {
                    let db = system_db.get_or_insert_with(|| {
                        let mut db = fontdb::Database::new();
                        db.load_system_fonts();
                        db
                    });
                    load_system_family(db, family)
                }
            };

            match attempt.and_then(|font| self.check_coverage(font)) {
                Ok(font) => {
                    log::debug!("Font candidate {:?} registered as '{}'", candidate, font.name);
                    return FontHandle::Embedded(Arc::new(font));
                }
                Err(e) => log::debug!("Font candidate {:?} skipped: {}", candidate, e),
            }
        }

        log::warn!("No candidate font registered; falling back to builtin Helvetica");
        FontHandle::builtin()
    }

    fn check_coverage(&self, font: EmbeddedFont) -> Result<EmbeddedFont, FontError> {
        let face = font
            .as_face()
            .ok_or_else(|| FontError::Parse(font.path.clone(), "face vanished".into()))?;
        let missing = self
            .required_glyphs
            .chars()
            .find(|c| !c.is_whitespace() && face.glyph_index(*c).is_none());
        drop(face);

        match missing {
            Some(missing) => Err(FontError::MissingGlyph {
                name: font.name.clone(),
                missing,
            }),
            None => Ok(font),
        }
    }
}

fn load_path(path: &Path) -> Result<EmbeddedFont, FontError> {
    let data = std::fs::read(path).map_err(|e| FontError::Io(path.to_path_buf(), e))?;
    EmbeddedFont::from_bytes(path, data, 0)
}

#[cfg(feature = "system-fonts")]
fn load_system_family(db: &fontdb::Database, family: &str) -> Result<EmbeddedFont, FontError> {
    let query = fontdb::Query {
        families: &[fontdb::Family::Name(family)],
        ..Default::default()
    };
    let id = db
        .query(&query)
        .ok_or_else(|| FontError::NotInstalled(family.to_string()))?;

    let path = match db.face(id).map(|info| &info.source) {
        Some(fontdb::Source::File(path)) => path.clone(),
        _ => PathBuf::from(family),
    };
    let (data, index) = db
        .with_face_data(id, |data, index| (data.to_vec(), index))
        .ok_or_else(|| FontError::NotInstalled(family.to_string()))?;

    EmbeddedFont::from_bytes(&path, data, index)
}
