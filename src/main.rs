use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

mod io_pipe;
use io_pipe::IoPipe;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Group availability submissions into per-slot Free/Maybe/Busy buckets.
    Format(IoArgs),

    /// Count performer appearances across lineup files, print counts sorted
    /// highest first.
    Tally {
        /// Lineup files to count across.
        #[arg(default_values = ["data/archive.json", "data/lineups.json"])]
        sources: Vec<PathBuf>,
    },
}

use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Format(args) => format::run(args.try_into()?),
        Tally { sources } => tally::run(sources),
    }
}

mod format;
mod tally;

/// Standard input/output specification for subcommands.
///
/// Defaults point at the conventional files under data/, `-` switches to
/// the standard streams.
#[derive(Debug, Args, Clone)]
pub struct IoArgs {
    /// Input file path, use '-' for stdin.
    #[arg(default_value = "data/user_submissions.json")]
    input: PathBuf,

    /// Output file path, use '-' for stdout.
    #[arg(short, long, default_value = "data/formatted_results.json")]
    output: PathBuf,
}
