// src/error.rs
use crate::cli::prompt::PromptError;
use invoicer_render::RenderError;
use invoicer_source::SourceError;
use thiserror::Error;

/// A comprehensive error type for the invoice generation pipeline.
///
/// A record that is simply not in the source is not an error; see
/// [`crate::Outcome::RecordNotFound`].
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Loading data failed: {0}")]
    Source(#[from] SourceError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Configuration is invalid: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Selection failed: {0}")]
    Prompt(#[from] PromptError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
