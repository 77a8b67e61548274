use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use pdfgrid::{
    load_pages, write_records, ExtractionOptions, InputFormat, Page, ParseMode, RenderConfig,
    SourceOptions, TextExtractor,
};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Page input shape, overriding detection by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum InputKind {
    /// JSON page dump, as written by --raw-lines
    Json,
    /// Decompressed content-stream text, pages split by form feeds
    Stream,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Grid,
    Elements,
    Lines,
    Raw,
}

#[derive(Parser, Debug)]
#[command(
    name = "pdfgrid",
    about = "Rebuild a text grid from decoded PDF content streams",
    version,
    author
)]
struct Cli {
    /// Page inputs; none or "-" reads standard input
    files: Vec<PathBuf>,

    /// Output grid width in characters
    #[arg(short = 'w', long, default_value_t = 160, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// Output grid height in rows
    #[arg(short = 'H', long, default_value_t = 120, value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,

    /// Keep text from running past the right edge
    #[arg(long)]
    fit: bool,

    /// Show empty vertical space (i.e. on blank pages)
    #[arg(long)]
    vertical_space: bool,

    /// Annotate rows with page numbers and log skipped lines
    #[arg(short, long)]
    verbose: bool,

    /// Parse as positioned text, i.e. 1 0 0 1 XPos YPos Tm ... (Text here) Tj
    #[arg(long, group = "mode")]
    positioned: bool,

    /// Parse as byte strings, i.e. <48656C6C6F> Tj ... ET
    #[arg(long, group = "mode")]
    bytes: bool,

    /// Print the page lines as JSON instead of rendering
    #[arg(long, group = "output")]
    raw_lines: bool,

    /// Print the raw page content instead of rendering
    #[arg(long, group = "output")]
    raw_text: bool,

    /// Print the positioned elements as JSON instead of rendering
    #[arg(long, group = "output")]
    elements: bool,

    /// Input shape; defaults to json for .json files, stream otherwise
    #[arg(long, value_enum)]
    input_format: Option<InputKind>,

    /// Page width in points for content-stream input
    #[arg(long, default_value_t = 612.0)]
    page_width: f64,

    /// Page height in points for content-stream input
    #[arg(long, default_value_t = 792.0)]
    page_height: f64,
}

impl Cli {
    fn render_config(&self) -> RenderConfig {
        RenderConfig {
            width: self.width,
            height: self.height,
            fit: self.fit,
            vertical_space: self.vertical_space,
            verbose: self.verbose,
        }
    }

    fn extraction_options(&self) -> ExtractionOptions {
        let mode = if self.bytes {
            ParseMode::Bytes
        } else if self.positioned {
            ParseMode::Positioned
        } else {
            ParseMode::Auto
        };
        ExtractionOptions { mode }
    }

    fn source_options(&self, path: Option<&Path>) -> SourceOptions {
        let format = match (self.input_format, path) {
            (Some(InputKind::Json), _) => InputFormat::Json,
            (Some(InputKind::Stream), _) => InputFormat::ContentStream,
            (None, Some(path)) => InputFormat::from_path(path),
            (None, None) => InputFormat::ContentStream,
        };
        SourceOptions {
            format,
            page_width: self.page_width,
            page_height: self.page_height,
        }
    }

    fn output_mode(&self) -> OutputMode {
        if self.raw_text {
            OutputMode::Raw
        } else if self.raw_lines {
            OutputMode::Lines
        } else if self.elements {
            OutputMode::Elements
        } else {
            OutputMode::Grid
        }
    }

    fn reads_stdin(&self) -> bool {
        self.files.is_empty() || self.files.iter().any(|f| f.as_os_str() == "-")
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "pdfgrid=debug"
    } else {
        "pdfgrid=warn"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal())
                .with_target(false),
        )
        .init();
}

fn write_pages<W: Write>(cli: &Cli, pages: &[Page], out: &mut W) -> Result<()> {
    match cli.output_mode() {
        OutputMode::Raw => {
            for page in pages {
                out.write_all(page.content().as_bytes())?;
            }
        }
        OutputMode::Lines => {
            write_records(pages, out).context("Failed to write page lines")?;
        }
        OutputMode::Elements | OutputMode::Grid => {
            let config = cli.render_config();
            let extractor = TextExtractor::with_options(cli.extraction_options());
            let layouts = extractor.extract(pages, &config);
            if cli.output_mode() == OutputMode::Elements {
                write_records(&layouts, out).context("Failed to write elements")?;
            } else {
                config
                    .render(&layouts, out)
                    .context("Failed to write rendered pages")?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

fn convert<R: Read, W: Write>(cli: &Cli, path: Option<&Path>, input: R, out: &mut W) -> Result<()> {
    let options = cli.source_options(path);
    let pages = load_pages(BufReader::new(input), &options).context("Failed to read pages")?;
    debug!(pages = pages.len(), format = ?options.format, "converting");
    write_pages(cli, &pages, out)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if cli.reads_stdin() {
        return match convert(&cli, None, io::stdin().lock(), &mut out) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!("failed to process -: {e:#}");
                ExitCode::FAILURE
            }
        };
    }

    let mut failed = false;
    for path in &cli.files {
        let result = File::open(path)
            .with_context(|| format!("Failed to open {}", path.display()))
            .and_then(|file| convert(&cli, Some(path.as_path()), file, &mut out));
        if let Err(e) = result {
            error!("failed to process {}: {e:#}", path.display());
            failed = true;
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
