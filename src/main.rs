use clap::Parser;
use invoicer::cli::{self, RunOptions};
use invoicer::{InvoicePipeline, PipelineError, Settings};
use std::io;
use std::path::PathBuf;

/// Render a single invoice from CSV or JSON data into a PDF.
#[derive(Parser, Debug)]
#[command(name = "invoicer", version, about)]
struct Args {
    /// TOML file with settings; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory scanned for .csv and .json data files.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Directory the PDF is written to.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Data file to use instead of choosing from a menu.
    #[arg(long)]
    source: Option<PathBuf>,

    /// Invoice identifier to render instead of choosing from a menu.
    #[arg(long)]
    id: Option<String>,

    /// Do not open the finished PDF.
    #[arg(long)]
    no_open: bool,

    /// Log debug output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), PipelineError> {
    let args = Args::parse();

    let default_filter = if args.verbose { "invoicer=debug" } else { "invoicer=info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    let mut settings = Settings::load(args.config.as_deref())?;
    if let Some(dir) = args.data_dir {
        settings.data_dir = dir;
    }
    if let Some(dir) = args.output_dir {
        settings.output_dir = dir;
    }
    if args.no_open {
        settings.open_viewer = false;
    }

    let options = RunOptions {
        source: args.source,
        identifier: args.id,
        open_viewer: settings.open_viewer,
    };
    let pipeline = InvoicePipeline::new().with_locator(settings.locator.clone());

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    cli::run(&settings, &options, &pipeline, &mut input, &mut output)?;
    Ok(())
}
