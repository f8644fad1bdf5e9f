use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

use concord::{build_from_file, join_line, RunStats};

#[derive(Parser, Debug)]
#[command(name = "concord")]
#[command(about = "Word concordance generator for plain-text documents")]
#[command(version)]
struct Args {
    /// Plain text document that will generate a concordance
    #[arg(short, long)]
    file: PathBuf,

    /// Abort when the document cannot be read instead of printing an empty
    /// concordance
    #[arg(long)]
    fail_fast: bool,

    /// Stats output file path (JSON); omitted means no stats file
    #[arg(long)]
    stats_out: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Logs go to stderr so the concordance on stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .json()
        .init();

    let args = Args::parse();

    info!("Starting concord");
    info!(?args, "Parsed CLI arguments");

    if args.fail_fast && !args.file.is_file() {
        anyhow::bail!("Document does not exist: {}", args.file.display());
    }

    let start_time = Instant::now();
    let (concordance, read_stats) = build_from_file(&args.file);

    if args.fail_fast {
        if let Some(ref error) = read_stats.read_error {
            anyhow::bail!("Failed to read document: {error}");
        }
    }

    concordance.for_each_word(|index, word, occurrences| {
        println!("{}", join_line(index, word, occurrences));
    });

    info!(
        "Printed {} concordance lines in {}ms",
        concordance.size(),
        start_time.elapsed().as_millis()
    );

    if let Some(ref stats_path) = args.stats_out {
        let run_stats = RunStats::from_run(
            &concordance,
            &read_stats,
            start_time.elapsed().as_millis() as u64,
        );
        std::fs::write(stats_path, serde_json::to_string_pretty(&run_stats)?)?;
        info!("Wrote run stats to {}", stats_path.display());
    }

    Ok(())
}
