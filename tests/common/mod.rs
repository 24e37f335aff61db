pub mod fixtures;

use invoicer::{FontHandle, InvoicePipeline, Outcome, PipelineError, Source};
use lopdf::Document as LopdfDocument;
use std::path::{Path, PathBuf};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn read(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let bytes = std::fs::read(path)?;
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }
}

/// A pipeline on the builtin face so results do not depend on installed fonts.
pub fn pipeline() -> InvoicePipeline {
    InvoicePipeline::new().with_font(FontHandle::builtin())
}

/// Renders `identifier` from `source` into `dir`, returning the outcome and the path used.
pub fn generate_into(
    source: &Source,
    identifier: &str,
    dir: &Path,
) -> Result<(Outcome, PathBuf), PipelineError> {
    let destination = dir.join(invoicer::output_file_name(identifier));
    let outcome = pipeline().generate(source, identifier, &destination)?;
    Ok((outcome, destination))
}
