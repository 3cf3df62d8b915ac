//! Append-only log of emitted signals

use anyhow::Context;
use chrono::{DateTime, Utc};
use spikewatch_core::{build_summary, SpikeSignal};
use spikewatch_telemetry::{append_jsonl, read_jsonl, SignalRecord};
use std::path::{Path, PathBuf};

pub fn to_record(signal: &SpikeSignal, window_start: DateTime<Utc>) -> SignalRecord {
    SignalRecord {
        window_start,
        term: signal.term.clone(),
        display_label: signal.display_label.clone(),
        confidence: signal.confidence,
        multiplier: signal.multiplier,
        mention_count: signal.mention_count,
        unique_source_count: signal.unique_source_count,
        summary: build_summary(&signal.evidence),
        detected_at: signal.detected_at,
    }
}

#[derive(Debug, Clone)]
pub struct SignalLog {
    path: PathBuf,
}

impl SignalLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record per signal; returns how many were written
    pub fn record(
        &self,
        signals: &[SpikeSignal],
        window_start: DateTime<Utc>,
    ) -> anyhow::Result<usize> {
        let records: Vec<SignalRecord> = signals
            .iter()
            .map(|signal| to_record(signal, window_start))
            .collect();
        append_jsonl(&self.path, &records)
            .with_context(|| format!("appending to {}", self.path.display()))?;
        tracing::info!(count = records.len(), path = %self.path.display(), "recorded signals");
        Ok(records.len())
    }

    pub fn read(&self) -> anyhow::Result<Vec<SignalRecord>> {
        read_jsonl(&self.path).with_context(|| format!("reading {}", self.path.display()))
    }
}
