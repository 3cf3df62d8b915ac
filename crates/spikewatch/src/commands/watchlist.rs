use anyhow::Context;
use spikewatch_core::Watchlist;
use spikewatch_telemetry::{Paths, PathsError};
use std::path::Path;

/// Explicit file, else the data directory's watchlist.json, else the built-in list.
/// `data_dir` is only consulted when no explicit file is given.
pub fn resolve<F>(explicit: Option<&Path>, data_dir: F) -> anyhow::Result<Watchlist>
where
    F: FnOnce() -> Result<Paths, PathsError>,
{
    if let Some(path) = explicit {
        return Watchlist::load(path)
            .with_context(|| format!("loading watchlist {}", path.display()));
    }

    let paths = data_dir()?;
    let configured = paths.watchlist_file();
    if configured.exists() {
        return Watchlist::load(&configured)
            .with_context(|| format!("loading watchlist {}", configured.display()));
    }

    tracing::debug!("no watchlist file, using built-in terms");
    Ok(Watchlist::default())
}

fn render(watchlist: &Watchlist) -> String {
    let mut lines = vec![
        format!("Watchlist ({} terms)", watchlist.len()),
        "==================".to_string(),
    ];
    for term in watchlist.terms() {
        lines.push(format!(
            "  {:<20} {:<16} baseline:{}",
            format!("{:?}", term.term),
            term.display_label,
            term.baseline
        ));
    }
    lines.join("\n")
}

pub fn run(file: Option<&Path>) -> anyhow::Result<()> {
    let watchlist = resolve(file, Paths::new)?;
    println!("{}", render(&watchlist));
    Ok(())
}
