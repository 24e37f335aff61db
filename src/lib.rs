//! Render a single invoice from tabular or nested JSON data into a PDF.
//!
//! The work is split across the workspace crates:
//! - `invoicer-fonts` picks a Cyrillic-capable font once per process
//! - `invoicer-source` loads CSV/JSON data and finds one record by identifier
//! - `invoicer-compose` turns a record into an ordered list of layout blocks
//! - `invoicer-render` paginates the blocks and writes the PDF
//!
//! [`InvoicePipeline`] ties them together; the [`cli`] module holds the
//! interactive driver used by the binary.

pub mod cli;
mod error;
mod settings;

pub use error::PipelineError;
pub use settings::Settings;

pub use invoicer_compose::{BlockKind, BlockStyle, LayoutBlock, compose};
pub use invoicer_fonts::{FontHandle, FontResolver, resolve_font};
pub use invoicer_render::{RenderError, RenderReport, Renderer, render};
pub use invoicer_source::{
    Locator, LocatorConfig, NormalizedRecord, Source, SourceError, get_record, list_identifiers,
};

use std::path::Path;

/// The result of asking the pipeline for one invoice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Rendered(RenderReport),
    /// No record in the source carries the requested identifier. Nothing was written.
    RecordNotFound,
}

/// Locates a record, composes it and renders it to disk.
#[derive(Debug, Clone)]
pub struct InvoicePipeline {
    locator: Locator,
    renderer: Renderer,
    /// Resolved on first use when not set explicitly.
    font: Option<FontHandle>,
}

impl Default for InvoicePipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl InvoicePipeline {
    /// A pipeline with the default locator, A4 geometry and the process-wide font.
    pub fn new() -> Self {
        Self {
            locator: Locator::default(),
            renderer: Renderer::default(),
            font: None,
        }
    }

    pub fn with_locator(mut self, config: LocatorConfig) -> Self {
        self.locator = Locator::new(config);
        self
    }

    pub fn with_font(mut self, font: FontHandle) -> Self {
        self.font = Some(font);
        self
    }

    pub fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn identifiers(&self, source: &Source) -> Vec<String> {
        self.locator.list_identifiers(source)
    }

    /// Composes the layout for `identifier`, or `None` when no record matches.
    pub fn compose_record(&self, source: &Source, identifier: &str) -> Option<Vec<LayoutBlock>> {
        let record = self.locator.get_record(source, identifier)?;
        let font = self.font.clone().unwrap_or_else(resolve_font);
        Some(compose(&record, &font))
    }

    /// Renders the invoice for `identifier` to `destination`.
    ///
    /// A missing record is reported as [`Outcome::RecordNotFound`] and the
    /// destination is left untouched.
    pub fn generate(
        &self,
        source: &Source,
        identifier: &str,
        destination: &Path,
    ) -> Result<Outcome, PipelineError> {
        let Some(blocks) = self.compose_record(source, identifier) else {
            log::warn!("No record with identifier '{}'", identifier);
            return Ok(Outcome::RecordNotFound);
        };
        log::debug!("Composed {} blocks for '{}'", blocks.len(), identifier);

        let report = self.renderer.render(&blocks, destination)?;
        Ok(Outcome::Rendered(report))
    }
}

/// Renders the invoice for `identifier` with the default locator and page geometry.
pub fn generate(
    source: &Source,
    identifier: &str,
    destination: &Path,
    font: &FontHandle,
) -> Result<Outcome, PipelineError> {
    InvoicePipeline::new()
        .with_font(font.clone())
        .generate(source, identifier, destination)
}

/// The file name an invoice is written under: `invoice_<slug>.pdf`.
pub fn output_file_name(identifier: &str) -> String {
    let slug = slug::slugify(identifier);
    if slug.is_empty() {
        "invoice_unnamed.pdf".to_string()
    } else {
        format!("invoice_{}.pdf", slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_names_are_filesystem_safe() {
        assert_eq!(output_file_name("INV-001"), "invoice_inv-001.pdf");
        assert_eq!(output_file_name("A/B C"), "invoice_a-b-c.pdf");
        assert_eq!(output_file_name("../etc"), "invoice_etc.pdf");
        assert_eq!(output_file_name("///"), "invoice_unnamed.pdf");
    }

    #[test]
    fn font_is_resolved_only_when_not_given() {
        assert!(InvoicePipeline::new().font.is_none());
        let pipeline = InvoicePipeline::new().with_font(FontHandle::builtin());
        assert_eq!(pipeline.font, Some(FontHandle::builtin()));
    }

    #[test]
    fn missing_record_composes_nothing() {
        let source = Source::from_json_str(r#"[{"invoice_id": "A"}]"#).unwrap();
        let pipeline = InvoicePipeline::new().with_font(FontHandle::builtin());
        assert!(pipeline.compose_record(&source, "B").is_none());
        assert_eq!(pipeline.compose_record(&source, "A").map(|b| b.len()), Some(9));
    }
}
