//! Command-line interface for inspecting OpenStreetMap XML files.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::io::{self, Write};
use structured_logger::{Builder, json::new_writer};

mod error;
mod fs;
mod summarise;

pub use error::CliError;
pub use summarise::{MapSummary, SummariseArgs, SummariseConfig, summarise_map, write_summary};

const ARG_MAP: &str = "map";
const ENV_SUMMARISE_MAP: &str = "OSMXML_CMDS_SUMMARISE_MAP";

/// Run the CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError`] when arguments or configuration are invalid, the map
/// cannot be read or decoded, or the summary cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    init_logging(cli.log_level);
    let stdout = io::stdout();
    execute(cli.command, &mut stdout.lock())
}

fn execute<W: Write>(command: Command, out: &mut W) -> Result<(), CliError> {
    match command {
        Command::Summarise(args) => {
            let config = args.into_config()?;
            config.validate_sources()?;
            let summary = summarise_map(&config.map)?;
            write_summary(&summary, out)
        }
    }
}

fn init_logging(level: LevelFilter) {
    Builder::with_level(level.as_str())
        .with_target_writer("*", new_writer(io::stderr()))
        .init();
}

#[derive(Debug, Parser)]
#[command(
    name = "osmxml",
    about = "Inspect OpenStreetMap XML map data",
    version
)]
struct Cli {
    /// Minimum level of the JSON log lines written to stderr.
    #[arg(long, global = true, value_name = "level", default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Decode a map data file and print a JSON summary.
    Summarise(SummariseArgs),
}

#[cfg(test)]
mod tests;
