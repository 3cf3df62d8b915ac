use spikewatch_alerts::SignalLog;
use spikewatch_telemetry::{Paths, SignalRecord};
use std::collections::HashMap;

const DISPLAY_LIMIT: usize = 20;

fn filter_records<'a>(records: &'a [SignalRecord], term: Option<&str>) -> Vec<&'a SignalRecord> {
    records
        .iter()
        .filter(|r| match term {
            // Match either the raw term or its label, ignoring case and the
            // trailing space on short terms
            Some(t) => {
                let wanted = t.trim().to_lowercase();
                r.term.trim() == wanted || r.display_label.to_lowercase() == wanted
            }
            None => true,
        })
        .collect()
}

fn compute_stats(records: &[&SignalRecord]) -> String {
    if records.is_empty() {
        return "No signals to analyze.".to_string();
    }

    let total = records.len();
    let avg_conf = records.iter().map(|r| f64::from(r.confidence)).sum::<f64>() / total as f64;
    let peak = records
        .iter()
        .max_by(|a, b| a.multiplier.total_cmp(&b.multiplier))
        .map(|r| format!("{} x{:.1}", r.display_label, r.multiplier))
        .unwrap_or_default();

    let mut per_term: HashMap<&str, usize> = HashMap::new();
    for r in records {
        *per_term.entry(r.display_label.as_str()).or_default() += 1;
    }
    let mut ranked: Vec<_> = per_term.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    let top = ranked
        .iter()
        .take(5)
        .map(|(label, n)| format!("{} ({})", label, n))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Total signals: {}\n\
         Avg confidence: {:.1}%\n\
         Peak multiplier: {}\n\
         Most frequent: {}",
        total, avg_conf, peak, top
    )
}

pub fn run(stats: bool, term: Option<&str>) -> anyhow::Result<()> {
    let paths = Paths::new()?;
    let records = SignalLog::new(paths.signals_file()).read()?;

    if records.is_empty() {
        println!("No signal history");
        return Ok(());
    }

    let filtered = filter_records(&records, term);

    if stats {
        println!("{}", compute_stats(&filtered));
        return Ok(());
    }

    let display: Vec<_> = filtered.into_iter().rev().take(DISPLAY_LIMIT).collect();

    println!("Recent Signals (last {})", display.len());
    println!("======================");
    for record in &display {
        println!(
            "  {} | {} conf:{}% x{:.1} mentions:{} sources:{}",
            record.detected_at.format("%Y-%m-%d %H:%M"),
            record.display_label,
            record.confidence,
            record.multiplier,
            record.mention_count,
            record.unique_source_count,
        );
    }
    Ok(())
}
