//! Seen-set of already-reported (term, window) pairs

use anyhow::Context;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use spikewatch_core::SpikeSignal;
use std::collections::BTreeSet;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeenEntry {
    pub window_start: DateTime<Utc>,
    pub term: String,
}

/// Start of the fixed-length window containing `now`, aligned to the Unix epoch
pub fn window_start(now: DateTime<Utc>, window: Duration) -> DateTime<Utc> {
    let secs = window.num_seconds().max(1);
    let start = now.timestamp().div_euclid(secs) * secs;
    DateTime::from_timestamp(start, 0).unwrap_or(now)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeenSet {
    entries: BTreeSet<SeenEntry>,
}

impl SeenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from disk; a missing file is an empty set
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading seen-set {}", path.display()))?;
        let set = serde_json::from_str(&contents)
            .with_context(|| format!("parsing seen-set {}", path.display()))?;
        Ok(set)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        spikewatch_telemetry::atomic_write(path, json.as_bytes())
            .with_context(|| format!("writing seen-set {}", path.display()))?;
        Ok(())
    }

    pub fn contains(&self, term: &str, window_start: DateTime<Utc>) -> bool {
        self.entries.contains(&SeenEntry {
            window_start,
            term: term.to_string(),
        })
    }

    /// Record a pair; returns true if it was new
    pub fn mark(&mut self, term: &str, window_start: DateTime<Utc>) -> bool {
        self.entries.insert(SeenEntry {
            window_start,
            term: term.to_string(),
        })
    }

    /// Keep only signals not yet reported in this window, and remember them
    pub fn filter_new(
        &mut self,
        signals: Vec<SpikeSignal>,
        window_start: DateTime<Utc>,
    ) -> Vec<SpikeSignal> {
        let before = signals.len();
        let fresh: Vec<SpikeSignal> = signals
            .into_iter()
            .filter(|signal| self.mark(&signal.term, window_start))
            .collect();

        tracing::debug!(
            window = %window_start,
            suppressed = before - fresh.len(),
            "seen-set filter"
        );
        fresh
    }

    /// Forget windows that started before `cutoff`; returns how many entries went
    pub fn prune_before(&mut self, cutoff: DateTime<Utc>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.window_start >= cutoff);
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn test_window_start_floors_to_window() {
        let day = Duration::hours(24);
        assert_eq!(
            window_start(at("2025-03-01T17:45:12Z"), day),
            at("2025-03-01T00:00:00Z")
        );

        let six = Duration::hours(6);
        assert_eq!(
            window_start(at("2025-03-01T17:45:12Z"), six),
            at("2025-03-01T12:00:00Z")
        );
    }

    #[test]
    fn test_window_start_on_boundary() {
        let day = Duration::hours(24);
        let boundary = at("2025-03-02T00:00:00Z");
        assert_eq!(window_start(boundary, day), boundary);
    }

    #[test]
    fn test_mark_and_contains() {
        let mut seen = SeenSet::new();
        let window = at("2025-03-01T00:00:00Z");
        assert!(seen.mark("iran", window));
        assert!(!seen.mark("iran", window));
        assert!(seen.contains("iran", window));
        assert!(!seen.contains("iran", at("2025-03-02T00:00:00Z")));
        assert!(!seen.contains("oil ", window));
    }

    #[test]
    fn test_prune_before() {
        let mut seen = SeenSet::new();
        seen.mark("iran", at("2025-02-27T00:00:00Z"));
        seen.mark("iran", at("2025-02-28T00:00:00Z"));
        seen.mark("oil ", at("2025-03-01T00:00:00Z"));

        let removed = seen.prune_before(at("2025-02-28T00:00:00Z"));
        assert_eq!(removed, 1);
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_load_missing_is_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        let seen = SeenSet::load(&dir.path().join("seen.json")).unwrap();
        assert!(seen.is_empty());
    }

    #[test]
    fn test_load_corrupt_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("seen.json");
        std::fs::write(&path, "{ nope").unwrap();
        assert!(SeenSet::load(&path).is_err());
    }
}
