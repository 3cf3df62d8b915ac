use spikewatch_core::Watchlist;
use spikewatch_telemetry::Paths;

/// Write the built-in watchlist unless one already exists; returns whether it wrote
fn write_starter_watchlist(paths: &Paths) -> anyhow::Result<bool> {
    let path = paths.watchlist_file();
    if path.exists() {
        return Ok(false);
    }
    let json = Watchlist::default().to_json()?;
    spikewatch_telemetry::atomic_write(&path, json.as_bytes())?;
    Ok(true)
}

pub fn run() -> anyhow::Result<()> {
    let paths = Paths::new()?;
    std::fs::create_dir_all(paths.root())?;

    if write_starter_watchlist(&paths)? {
        println!("✓ Wrote starter watchlist to {}", paths.watchlist_file().display());
    } else {
        println!("Watchlist already exists at {}", paths.watchlist_file().display());
    }
    println!("\nData directory: {}", paths.root().display());
    println!("  - watchlist.json  (edit terms and baselines)");
    println!("  - signals.jsonl   (written by `spikewatch detect`)");
    println!("  - seen.json       (written by `spikewatch detect --only-new`)");
    Ok(())
}
