//! Communication trace generator CLI.
//!
//! Generates ring-pattern boundary-communication traces and writes one
//! `msgs.<rank>.<ext>` file per rank for the topology benchmark to replay.

use clap::Parser;
use commtrace_generator::{Generator, GeneratorConfig};
use commtrace_trace::TraceWriter;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "commtrace-gen")]
#[command(about = "Ring-pattern communication trace generator")]
#[command(version)]
struct Cli {
    /// Number of ranks
    #[arg(long, default_value = "4")]
    nranks: u32,

    /// Number of timesteps
    #[arg(long, default_value = "2")]
    timesteps: u32,

    /// Directory the rank files are written to
    #[arg(short, long)]
    output_dir: PathBuf,

    /// Random seed; omit to draw a different trace every run
    #[arg(long)]
    seed: Option<u64>,

    /// Rank-file extension
    #[arg(long, default_value = "csv")]
    file_ext: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = GeneratorConfig::new(cli.nranks, cli.timesteps);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let traces = Generator::new(config)?.run()?;

    let writer = TraceWriter::new(&cli.output_dir).with_file_ext(&cli.file_ext);
    let paths = writer.write(&traces)?;

    info!(
        ranks = paths.len(),
        total_events = traces.total_events(),
        output_dir = %cli.output_dir.display(),
        "trace generation finished"
    );

    Ok(())
}
