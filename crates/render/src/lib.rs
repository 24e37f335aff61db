//! Renders a composed block sequence into a PDF file.
//!
//! Rendering runs in two steps:
//! - [`paginate`] places every line of every block on A4 pages with 20mm margins
//! - [`write_pdf`] serializes the pages, embedding the document font
//!
//! [`render`] runs both and publishes the result atomically: the bytes are
//! written to a temporary file beside the destination and renamed over it
//! only once complete, so a failed render never leaves a truncated file.

mod error;
mod geometry;
mod paginate;
mod pdf;
mod text;

pub use error::RenderError;
pub use geometry::{PT_PER_MM, PageGeometry, flip_y};
pub use paginate::{Page, PlacedText, paginate};
pub use pdf::write_pdf;
pub use text::wrap_text;

use invoicer_compose::LayoutBlock;
use std::io::Write;
use std::path::{Path, PathBuf};

const DOCUMENT_TITLE: &str = "Invoice";

/// What a completed render produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderReport {
    pub path: PathBuf,
    pub pages: usize,
    pub bytes: usize,
}

/// The serialized document and its page count, before it touches the disk.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub bytes: Vec<u8>,
    pub pages: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Renderer {
    geometry: PageGeometry,
}

impl Renderer {
    pub fn new(geometry: PageGeometry) -> Self {
        Self { geometry }
    }

    pub fn paginate(&self, blocks: &[LayoutBlock]) -> Result<Vec<Page>, RenderError> {
        paginate(blocks, &self.geometry)
    }

    pub fn render_to_bytes(&self, blocks: &[LayoutBlock]) -> Result<RenderedDocument, RenderError> {
        let pages = self.paginate(blocks)?;
        let bytes = write_pdf(&pages, &self.geometry, DOCUMENT_TITLE)?;
        Ok(RenderedDocument {
            pages: pages.len(),
            bytes,
        })
    }

    /// Renders `blocks` and replaces `destination` with the result.
    pub fn render(&self, blocks: &[LayoutBlock], destination: &Path) -> Result<RenderReport, RenderError> {
        let document = self.render_to_bytes(blocks)?;
        publish(&document.bytes, destination)?;
        log::info!(
            "Rendered {} page(s), {} bytes to {}",
            document.pages,
            document.bytes.len(),
            destination.display()
        );
        Ok(RenderReport {
            path: destination.to_path_buf(),
            pages: document.pages,
            bytes: document.bytes.len(),
        })
    }
}

/// [`Renderer::render`] on the default A4 geometry.
pub fn render(blocks: &[LayoutBlock], destination: &Path) -> Result<RenderReport, RenderError> {
    Renderer::default().render(blocks, destination)
}

fn publish(bytes: &[u8], destination: &Path) -> Result<(), RenderError> {
    let directory = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = tempfile::Builder::new()
        .prefix(".invoicer-")
        .suffix(".pdf.part")
        .tempfile_in(directory)
        .map_err(|e| RenderError::io(directory, e))?;
    staged
        .write_all(bytes)
        .and_then(|_| staged.as_file().sync_all())
        .map_err(|e| RenderError::io(staged.path(), e))?;

    staged
        .persist(destination)
        .map_err(|e| RenderError::io(destination, e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use invoicer_compose::compose;
    use invoicer_fonts::{FontHandle, resolve_font};
    use invoicer_source::NormalizedRecord;
    use serde_json::{Value, json};
    use std::fs;

    fn blocks() -> Vec<LayoutBlock> {
        blocks_in(&FontHandle::builtin())
    }

    fn blocks_in(font: &FontHandle) -> Vec<LayoutBlock> {
        let Value::Object(fields) = json!({
            "invoice_id": "INV-1",
            "customer_name": "ООО Ромашка",
            "date": "2024-01-01",
            "amount": "500",
            "description": "Consulting"
        }) else {
            unreachable!()
        };
        compose(&NormalizedRecord::from(fields), font)
    }

    #[test]
    fn renders_a_single_page_invoice() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("invoice.pdf");

        let report = render(&blocks(), &destination).unwrap();
        assert_eq!(report.pages, 1);

        let bytes = fs::read(&destination).unwrap();
        assert_eq!(bytes.len(), report.bytes);
        assert!(bytes.starts_with(b"%PDF"));
        let document = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(document.get_pages().len(), 1);
    }

    #[test]
    fn overwrites_existing_destination_and_leaves_no_staging_files() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("invoice.pdf");
        fs::write(&destination, b"stale").unwrap();

        render(&blocks(), &destination).unwrap();

        assert!(fs::read(&destination).unwrap().starts_with(b"%PDF"));
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn unwritable_destination_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("missing-dir").join("invoice.pdf");

        let err = render(&blocks(), &destination).unwrap_err();
        assert!(matches!(err, RenderError::Io { .. }));
        assert!(!destination.exists());
    }

    #[test]
    fn invalid_blocks_leave_destination_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("invoice.pdf");
        fs::write(&destination, b"previous").unwrap();

        let mut broken = blocks();
        broken[0].style.size = f32::NAN;
        let err = render(&broken, &destination).unwrap_err();

        assert!(matches!(err, RenderError::InvalidBlock { index: 0, .. }));
        assert_eq!(fs::read(&destination).unwrap(), b"previous");
    }

    #[test]
    fn page_count_is_stable_across_renders() {
        let renderer = Renderer::default();
        let first = renderer.render_to_bytes(&blocks()).unwrap();
        let second = renderer.render_to_bytes(&blocks()).unwrap();
        assert_eq!(first.pages, second.pages);
        assert_eq!(renderer.paginate(&blocks()).unwrap(), renderer.paginate(&blocks()).unwrap());
    }

    #[test]
    fn renders_with_the_resolved_embedded_font() {
        let font = resolve_font();
        if !font.is_embedded() {
            eprintln!("no embeddable system font installed; skipping");
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("invoice.pdf");

        let report = render(&blocks_in(&font), &destination).unwrap();

        let document = lopdf::Document::load_mem(&fs::read(&destination).unwrap()).unwrap();
        assert_eq!(document.get_pages().len(), report.pages);
    }
}
