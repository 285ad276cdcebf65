//! kicad-netclasses - list KiCad net classes and their nets from the command line.

use anyhow::Context;
use clap::Parser;
use netclasses::{ExtractError, ExtractOptions, NetClassCore};
use std::io::Write;
use std::path::PathBuf;
use std::process;
use tracing::Level;

#[derive(Parser)]
#[command(name = "kicad-netclasses")]
#[command(about = "Print KiCad net classes and their nets as CSV rows", long_about = None)]
#[command(version)]
struct Cli {
    /// KiCad project files (.kicad_pro)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Process every file instead of stopping after the first one that extracts
    #[arg(long)]
    all: bool,

    /// Log progress to stderr (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    };

    process::exit(exit_code);
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let options = ExtractOptions { all_files: cli.all };
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let outcome = NetClassCore::run(cli.files.as_slice(), &options, &mut out).map_err(|e| {
        let context = match e {
            ExtractError::Output(_) => "failed to write rows",
            _ => "failed to extract net classes",
        };
        anyhow::Error::new(e).context(context)
    })?;
    out.flush().context("failed to write rows")?;

    tracing::info!(
        "Done: {} files extracted, {} unreadable, {} rows",
        outcome.files_processed,
        outcome.files_failed,
        outcome.rows
    );
    Ok(())
}
