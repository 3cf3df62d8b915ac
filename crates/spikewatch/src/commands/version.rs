pub fn run() -> anyhow::Result<()> {
    println!("spikewatch {}", env!("CARGO_PKG_VERSION"));
    println!("Baseline-relative keyword spike detection for news headlines");
    Ok(())
}
