//! Font resolution for invoice documents.
//!
//! A document is set in a single face chosen once per process:
//! - A platform font from a short list of well-known paths, when it covers
//!   the glyphs the labels and typical customer data need
//! - Otherwise a family from the system font database (feature: `system-fonts`)
//! - Otherwise the builtin Helvetica face, which needs no embedding
//!
//! Resolution never fails; see [`resolve_font`].

mod error;
mod handle;
mod resolver;

pub use error::FontError;
pub use handle::{BuiltinFace, EmbeddedFont, FontHandle, is_latin1};
pub use resolver::{FontCandidate, FontResolver, REQUIRED_GLYPHS, platform_candidates, resolve_font};
