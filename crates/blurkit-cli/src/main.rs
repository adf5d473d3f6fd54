//! blurkit - build, inspect, and edit coefficient-grid placeholders
//!
//! Grids are read and written as JSON nested rows, `[[[r, g, b], ...], ...]`,
//! in linear light. Colours on the command line are sRGB hex.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{adjust, blend, combine, info, sample};

#[derive(Parser)]
#[command(name = "blurkit")]
#[command(author, version, about = "Coefficient-grid placeholder toolkit")]
#[command(long_about = "
Builds, inspects, and edits BlurHash-style coefficient grids without
going through pixels. Grids are JSON nested rows in linear light.

Examples:
  blurkit blend --top '#ff8080' --bottom '#0080ff' -o sky.json
  blurkit blend --corners '#ff0000' '#00ff00' '#0000ff' '#ffffff'
  blurkit blend --series '#ff0000' '#ffff00' '#00ff00' --components 4
  blurkit info sky.json --json
  blurkit adjust sky.json --op punch=1.5 --op darken=0.2 --op mirror-h
  blurkit adjust sky.json --op brightness=0.7 -o bright.json
  blurkit combine a.json b.json --mode avg
  blurkit sample sky.json -W 8 -H 4
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a grid from colours
    #[command(visible_alias = "b")]
    Blend(blend::BlendArgs),

    /// Show average, brightness, edge, corner, and contrast colours
    #[command(visible_alias = "i")]
    Info(info::InfoArgs),

    /// Apply a sequence of edits
    #[command(visible_alias = "a")]
    Adjust(adjust::AdjustArgs),

    /// Add, subtract, or average two grids
    Combine(combine::CombineArgs),

    /// Reconstruct a table of sRGB colours
    #[command(visible_alias = "s")]
    Sample(sample::SampleArgs),
}

/// Installs the global tracing subscriber.
///
/// The returned guard must stay alive for buffered file logs to be flushed.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .with_context(|| format!("Invalid log file path: {}", path.display()))?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(Some(guard))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    match cli.command {
        Commands::Blend(args) => blend::run(args),
        Commands::Info(args) => info::run(args),
        Commands::Adjust(args) => adjust::run(args),
        Commands::Combine(args) => combine::run(args),
        Commands::Sample(args) => sample::run(args),
    }
}
