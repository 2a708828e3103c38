//! chunk-tts - Split a text file into TTS-friendly chunks, printed as JSON

use anyhow::{Context, Result};
use chunk_tts::{Chunker, ChunkerConfig, output};
use clap::Parser;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "chunk-tts")]
#[command(about = "Chunk text into TTS-friendly units", long_about = None)]
#[command(version)]
struct Args {
    /// Path to the input text file ("-" reads stdin)
    input: PathBuf,

    /// Maximum characters per chunk (default: 200)
    #[arg(long)]
    max_len: Option<usize>,

    /// Config file (default: <config dir>/cli-programs/chunk-tts.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    log::debug!("Arguments: {:?}", args);

    let config = load_config(&args)?;
    let text = read_input(&args.input)?;

    let chunker = Chunker::new(&config).context("Failed to build chunker")?;
    let chunks = chunker.chunk(&text);
    log::info!(
        "{} chunk(s) from {} ({} chars)",
        chunks.len(),
        args.input.display(),
        text.chars().count()
    );

    output::write_json(io::stdout().lock(), &chunks).context("Failed to write output")?;
    Ok(())
}

/// Initialize logging to stderr based on verbosity; RUST_LOG still wins.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Load the explicit or default config, then apply `--max-len`.
fn load_config(args: &Args) -> Result<ChunkerConfig> {
    let config = match &args.config {
        Some(path) => ChunkerConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ChunkerConfig::load().context("Failed to load configuration")?,
    };

    match args.max_len {
        Some(max_len) => config.with_max_len(max_len).context("Invalid --max-len"),
        None => Ok(config),
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }

    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
