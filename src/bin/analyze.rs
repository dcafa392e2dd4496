//! Analysis Binary
//!
//! Interactive REPL over the aggregate store: per-player stats,
//! population averages, JSON export.

use clap::Parser;
use railbird::analysis::CLI;
use railbird::save::Archive;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// aggregate store snapshot
    #[arg(long, default_value = "railbird.json")]
    store: PathBuf,
}

fn main() -> anyhow::Result<()> {
    railbird::log();
    let args = Args::parse();
    CLI::new(Archive::open(&args.store)?).run();
    Ok(())
}
