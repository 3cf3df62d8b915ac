use crate::cli::DetectArgs;
use anyhow::Context;
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use spikewatch_alerts::{window_start, SeenSet, SignalLog};
use spikewatch_core::{
    build_summary, score_term, Detector, HeadlineRecord, SpikeSignal, Watchlist,
};
use spikewatch_telemetry::Paths;
use std::path::Path;

/// Seen-set entries older than this many windows are dropped
const SEEN_RETENTION_WINDOWS: i32 = 7;

#[derive(Deserialize)]
#[serde(untagged)]
enum Snapshot {
    Bare(Vec<HeadlineRecord>),
    Envelope { articles: Vec<HeadlineRecord> },
}

fn parse_snapshot(json: &str) -> serde_json::Result<Vec<HeadlineRecord>> {
    let snapshot: Snapshot = serde_json::from_str(json)?;
    Ok(match snapshot {
        Snapshot::Bare(headlines) => headlines,
        Snapshot::Envelope { articles } => articles,
    })
}

fn load_snapshot(path: &Path) -> anyhow::Result<Vec<HeadlineRecord>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading headlines {}", path.display()))?;
    parse_snapshot(&contents).with_context(|| format!("parsing headlines {}", path.display()))
}

fn render_panel(signals: &[SpikeSignal]) -> String {
    if signals.is_empty() {
        return "No spikes detected.".to_string();
    }

    let mut lines = vec![
        format!("Spike Signals ({})", signals.len()),
        "=================".to_string(),
    ];
    for (rank, signal) in signals.iter().enumerate() {
        lines.push(format!(
            "{:>2}. {} | conf:{}% x{:.1} mentions:{} sources:{}",
            rank + 1,
            signal.display_label,
            signal.confidence,
            signal.multiplier,
            signal.mention_count,
            signal.unique_source_count,
        ));
        let summary = build_summary(&signal.evidence);
        if !summary.is_empty() {
            lines.push(format!("    {}", summary));
        }
    }
    lines.join("\n")
}

fn render_explain(
    detector: &Detector,
    headlines: &[HeadlineRecord],
    watchlist: &Watchlist,
) -> String {
    let config = detector.config();
    let mut lines = vec!["Term Breakdown".to_string(), "--------------".to_string()];
    for term in watchlist.terms() {
        let tally = score_term(headlines, term, config.max_evidence);
        let multiplier = config.multiplier(tally.mention_count, term.baseline);
        let verdict = detector
            .rejection_reason(&tally, term.baseline)
            .unwrap_or("spiking");
        lines.push(format!(
            "  {:<16} mentions:{} sources:{} baseline:{} x{:.1} -> {}",
            term.display_label,
            tally.mention_count,
            tally.unique_source_count,
            term.baseline,
            multiplier,
            verdict
        ));
    }
    lines.join("\n")
}

/// Drop signals already reported in this window and append the rest to the
/// signal log. The seen-set is only saved after the log append succeeds, so a
/// failed append leaves the signals eligible on the next run.
fn settle(
    mut signals: Vec<SpikeSignal>,
    now: DateTime<Utc>,
    args: &DetectArgs,
    paths: &Paths,
) -> anyhow::Result<Vec<SpikeSignal>> {
    let window_len = Duration::hours(i64::from(args.window_hours));
    let window = window_start(now, window_len);

    let mut seen = None;
    if args.only_new {
        let mut set = SeenSet::load(&paths.seen_file())?;
        let cutoff = window_len
            .checked_mul(SEEN_RETENTION_WINDOWS)
            .and_then(|retention| window.checked_sub_signed(retention));
        match cutoff {
            Some(cutoff) => {
                set.prune_before(cutoff);
            }
            None => tracing::debug!(
                window_hours = args.window_hours,
                "retention reaches past the earliest date, keeping every seen entry"
            ),
        }
        signals = set.filter_new(signals, window);
        seen = Some(set);
    }

    if !args.no_record && !signals.is_empty() {
        SignalLog::new(paths.signals_file()).record(&signals, window)?;
    }

    if let Some(set) = seen {
        set.save(&paths.seen_file())?;
    }
    Ok(signals)
}

pub fn run(args: &DetectArgs) -> anyhow::Result<()> {
    let watchlist = super::watchlist::resolve(args.watchlist.as_deref(), Paths::new)?;

    let mut headlines = load_snapshot(&args.headlines)?;
    if headlines.len() > args.max_headlines {
        tracing::info!(
            total = headlines.len(),
            kept = args.max_headlines,
            "truncating headline snapshot"
        );
        headlines.truncate(args.max_headlines);
    }

    let detector = Detector::default();
    let now = Utc::now();
    let mut signals = detector.detect(&headlines, watchlist.terms(), now);

    let records = !args.no_record && !signals.is_empty();
    if args.only_new || records {
        signals = settle(signals, now, args, &Paths::new()?)?;
    }

    if args.explain {
        println!("{}\n", render_explain(&detector, &headlines, &watchlist));
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&signals)?);
    } else {
        println!("{}", render_panel(&signals));
    }
    Ok(())
}
