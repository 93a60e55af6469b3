mod output;
mod runner;

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use navwarn_core::OutputFormat;
use tracing_subscriber::EnvFilter;

use crate::output::{RenderOptions, View};

#[derive(Debug, Parser)]
#[command(name = "navwarn")]
#[command(about = "Parse free-text navigational warnings into structured locations")]
struct Cli {
    /// Output format (`json` or `yaml`); overrides `NAVWARN_OUTPUT_FORMAT`.
    #[arg(long, global = true, value_parser = navwarn_core::config::parse_output_format)]
    format: Option<OutputFormat>,

    /// Print JSON on a single line.
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the parsed record of each bulletin. Reads stdin when no file is given.
    Parse { files: Vec<PathBuf> },
    /// Print the map features of each bulletin. Reads stdin when no file is given.
    Features { files: Vec<PathBuf> },
}

impl Commands {
    fn into_parts(self) -> (View, Vec<PathBuf>) {
        match self {
            Commands::Parse { files } => (View::Mapped, files),
            Commands::Features { files } => (View::Features, files),
        }
    }
}

fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Argument errors and --help never depend on the environment.
    let cli = Cli::parse();
    let config = navwarn_core::load_app_config()?;
    init_tracing(&config.log_level)?;
    tracing::debug!(
        log_level = %config.log_level,
        output_format = %config.output_format,
        pretty = config.pretty,
        max_concurrent_files = config.max_concurrent_files,
        "loaded config"
    );

    let options = RenderOptions {
        format: cli.format.unwrap_or(config.output_format),
        pretty: config.pretty && !cli.compact,
    };
    let (view, files) = cli.command.into_parts();

    let bulletins = if files.is_empty() {
        vec![runner::parse_stdin().await?]
    } else {
        runner::parse_files(&files, config.max_concurrent_files).await?
    };

    let documents = bulletins
        .iter()
        .map(|mapped| output::render(mapped, view, options))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut stdout = std::io::stdout().lock();
    output::write_documents(&mut stdout, &documents, options.format)?;
    stdout.flush()?;

    Ok(())
}
