//! Interactive driver: pick a data file, pick a record, render, open.

pub mod discovery;
pub mod prompt;
pub mod viewer;

pub use discovery::{DATA_EXTENSIONS, enumerate_files};
pub use prompt::{PromptError, prompt_choice};
pub use viewer::open_in_viewer;

use crate::{InvoicePipeline, Outcome, PipelineError, RenderReport, Settings, Source, output_file_name};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Choices made up front on the command line. Anything left `None` is asked for.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub source: Option<PathBuf>,
    pub identifier: Option<String>,
    pub open_viewer: bool,
}

/// How a driver run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    Rendered(RenderReport),
    NoDataFiles,
    NoIdentifiers,
    RecordNotFound(String),
}

/// Runs one selection and render cycle, reading choices from `input` and
/// reporting progress to `output`.
pub fn run<R: BufRead, W: Write>(
    settings: &Settings,
    options: &RunOptions,
    pipeline: &InvoicePipeline,
    input: &mut R,
    output: &mut W,
) -> Result<RunStatus, PipelineError> {
    settings.ensure_directories()?;

    let source_path = match &options.source {
        Some(path) => path.clone(),
        None => {
            let files = enumerate_files(&settings.data_dir, DATA_EXTENSIONS)?;
            if files.is_empty() {
                writeln!(
                    output,
                    "No data files (.csv, .json) found in {}",
                    settings.data_dir.display()
                )?;
                return Ok(RunStatus::NoDataFiles);
            }
            let names: Vec<String> = files
                .iter()
                .map(|p| p.file_name().unwrap_or(p.as_os_str()).to_string_lossy().into_owned())
                .collect();
            let index = prompt_choice("Available data files:", &names, input, output)?;
            files[index].clone()
        }
    };

    let source = Source::from_path(&source_path)?;

    let identifier = match &options.identifier {
        Some(id) => id.clone(),
        None => {
            let identifiers = pipeline.identifiers(&source);
            if identifiers.is_empty() {
                writeln!(output, "No invoice identifiers found in {}", source_path.display())?;
                return Ok(RunStatus::NoIdentifiers);
            }
            let index = prompt_choice("Available invoices:", &identifiers, input, output)?;
            identifiers[index].clone()
        }
    };

    let destination = settings.output_dir.join(output_file_name(&identifier));
    match pipeline.generate(&source, &identifier, &destination)? {
        Outcome::Rendered(report) => {
            writeln!(output, "Invoice written to {}", report.path.display())?;
            if options.open_viewer
                && let Err(e) = open_in_viewer(&report.path)
            {
                log::warn!("Could not open {} in a viewer: {}", report.path.display(), e);
            }
            Ok(RunStatus::Rendered(report))
        }
        Outcome::RecordNotFound => {
            writeln!(output, "Invoice '{}' not found in {}", identifier, source_path.display())?;
            Ok(RunStatus::RecordNotFound(identifier))
        }
    }
}
