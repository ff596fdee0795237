mod config;
mod logging;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use roster_codegen::{GenerationEngine, GenerationError, GenerationOutcome};
use roster_model::{Person, Team};
use thiserror::Error;

use config::load_config;
use logging::init_logging;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{} stage failed for {}: {0}", .0.stage(), .0.kind())]
    Generation(#[from] GenerationError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config error: {0}")]
    TomlDecode(#[from] toml::de::Error),
    #[error("logging error: {0}")]
    Logging(String),
}

/// Compile the roster data files into Rust sources.
#[derive(Parser, Debug)]
#[command(name = "roster-gen", version, about = "Compile roster data files into Rust sources")]
struct Cli {
    /// Config file; ignored when it does not exist.
    #[arg(long, default_value = "roster.toml")]
    config: PathBuf,
    /// Directory holding `<collection>.yaml` data files.
    #[arg(long)]
    data_dir: Option<PathBuf>,
    /// Directory where generated sources are written.
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// Emit logs as JSON lines.
    #[arg(long, default_value_t = false)]
    json_logs: bool,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    let mut config = load_config(&cli.config)?;
    if let Some(data_dir) = cli.data_dir {
        config.generate.data_dir = data_dir;
    }
    if let Some(out_dir) = cli.out_dir {
        config.generate.out_dir = out_dir;
    }
    config.logging.json |= cli.json_logs;

    init_logging(&config.logging)?;

    let timer = Instant::now();
    tracing::info!(
        event = "run_started",
        data_dir = %config.generate.data_dir.display(),
        out_dir = %config.generate.out_dir.display()
    );

    let engine = GenerationEngine::new(config.generate);
    let outcomes = [
        report(engine.generate::<Person>("people"))?,
        report(engine.generate::<Team>("teams"))?,
    ];

    let records: usize = outcomes.iter().map(|outcome| outcome.records).sum();
    let duration_ms = timer.elapsed().as_millis();
    tracing::info!(
        event = "run_finished",
        status = "success",
        collections = outcomes.len(),
        records = records,
        duration_ms = duration_ms
    );

    Ok(())
}

fn report(
    result: Result<GenerationOutcome, GenerationError>,
) -> Result<GenerationOutcome, CliError> {
    match result {
        Ok(outcome) => {
            tracing::info!(
                event = "collection_generated",
                kind = %outcome.kind,
                collection = %outcome.collection,
                records = outcome.records,
                bytes = outcome.bytes_written,
                path = %outcome.output_path.display()
            );
            Ok(outcome)
        }
        Err(err) => {
            tracing::error!(
                event = "generation_failed",
                kind = err.kind(),
                stage = %err.stage(),
                error = %err
            );
            Err(err.into())
        }
    }
}
