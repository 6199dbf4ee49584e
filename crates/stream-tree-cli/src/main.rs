//! # stream-tree
//!
//! Prints the display tree of a decoded serialization stream.
//!
//! The input is an AST produced by a stream decoder and dumped as JSON,
//! optionally hex-encoded. Output is either the tree-widget JSON model or an
//! indented text outline.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use stream_tree::sources::JsonAstSource;
use stream_tree::{hex, outline, render, AstSource, RenderConfig};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "stream-tree",
    version = env!("CARGO_PKG_VERSION"),
    about = "Show a decoded Java serialization stream as a labelled tree"
)]
struct Cli {
    /// AST file to read (stdin if omitted or `-`)
    input: Option<PathBuf>,

    /// Input is a hex dump of the AST bytes
    #[arg(long)]
    hex: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// JSON file with render settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Maximum back-references followed per label
    #[arg(long)]
    max_reference_depth: Option<usize>,

    /// Do not open the payload entry
    #[arg(long)]
    collapse: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Indented outline
    Text,
    /// Tree-widget JSON model
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli)?;
    let bytes = read_input(cli.input.as_deref())?;
    let bytes = if cli.hex {
        let text = String::from_utf8(bytes).context("hex input is not text")?;
        hex::parse_hex(&text)?
    } else {
        bytes
    };

    let source = JsonAstSource::new();
    debug!(source = source.name(), bytes = bytes.len(), "decoding input");
    let ast = source.decode(&bytes)?;

    let tree = render(&ast, &config).context("stream could not be rendered")?;
    info!(entries = tree.len(), "rendered");

    let mut stdout = io::stdout().lock();
    match cli.format {
        Format::Text => stdout.write_all(outline(&tree).as_bytes())?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut stdout, &tree)?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}

/// Logs go to stderr so they never mix with the rendered tree.
fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn load_config(cli: &Cli) -> Result<RenderConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => RenderConfig::default(),
    };

    if let Some(depth) = cli.max_reference_depth {
        config.max_reference_depth = depth;
    }
    if config.max_reference_depth == 0 {
        bail!("max reference depth must be at least 1");
    }
    if cli.collapse {
        config.expand_payload = false;
    }
    Ok(config)
}

fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) if path != Path::new("-") => {
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))
        }
        _ => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}
