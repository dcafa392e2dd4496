//! Ingestion Binary
//!
//! Batch-ingests a directory of plain-text hand-history files into the
//! aggregate store, then prints what happened.

use clap::Parser;
use railbird::ingest::Driver;
use railbird::save::Archive;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// hand-history directory (falls back to RAILBIRD_HAND_DIR, then ./hands)
    #[arg(long)]
    dir: Option<PathBuf>,
    /// aggregate store snapshot
    #[arg(long, default_value = "railbird.json")]
    store: PathBuf,
}

impl Args {
    fn dir(&self) -> PathBuf {
        self.dir
            .clone()
            .or_else(|| std::env::var("RAILBIRD_HAND_DIR").ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("hands"))
    }
}

fn main() -> anyhow::Result<()> {
    railbird::log();
    let args = Args::parse();
    let mut driver = Driver::new(Archive::open(&args.store)?);
    let report = driver.ingest_dir(&args.dir())?;
    println!("{}", report);
    Ok(())
}
