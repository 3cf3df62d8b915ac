//! Baseline-relative keyword spike detector

use crate::config::DetectorConfig;
use crate::types::{EvidenceItem, HeadlineRecord, SpikeSignal, TrackedTerm};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Raw counts for one term over one snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct TermTally {
    pub mention_count: usize,
    pub unique_source_count: usize,
    /// First matches in encounter order, capped
    pub evidence: Vec<EvidenceItem>,
}

#[derive(Debug, Clone, Default)]
pub struct Detector {
    config: DetectorConfig,
}

impl Detector {
    pub fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Rank the terms that are spiking in `headlines`
    pub fn detect(
        &self,
        headlines: &[HeadlineRecord],
        terms: &[TrackedTerm],
        now: DateTime<Utc>,
    ) -> Vec<SpikeSignal> {
        // Lowercase each title once, not once per term
        let lowered: Vec<String> = headlines.iter().map(|h| h.title.to_lowercase()).collect();

        let mut signals: Vec<SpikeSignal> = terms
            .iter()
            .filter_map(|term| {
                let tally = tally(headlines, &lowered, term, self.config.max_evidence);
                self.evaluate(term, tally, now)
            })
            .collect();

        signals.sort_by(|a, b| {
            b.confidence
                .cmp(&a.confidence)
                .then_with(|| b.multiplier.total_cmp(&a.multiplier))
                .then_with(|| a.term.cmp(&b.term))
        });
        signals.truncate(self.config.max_signals);

        tracing::debug!(
            headlines = headlines.len(),
            terms = terms.len(),
            signals = signals.len(),
            "spike detection finished"
        );
        signals
    }

    /// Why a tally would not produce a signal, or `None` if it would
    pub fn rejection_reason(&self, tally: &TermTally, baseline: f64) -> Option<&'static str> {
        if tally.mention_count < self.config.min_mentions {
            return Some("too few mentions");
        }
        if tally.unique_source_count < self.config.min_sources {
            return Some("too few sources");
        }
        if self.config.multiplier(tally.mention_count, baseline) < self.config.min_multiplier {
            return Some("below baseline multiplier");
        }
        None
    }

    fn evaluate(
        &self,
        term: &TrackedTerm,
        tally: TermTally,
        now: DateTime<Utc>,
    ) -> Option<SpikeSignal> {
        if let Some(reason) = self.rejection_reason(&tally, term.baseline) {
            tracing::debug!(
                term = %term.term,
                mentions = tally.mention_count,
                sources = tally.unique_source_count,
                reason,
                "term rejected"
            );
            return None;
        }

        let multiplier = self.config.multiplier(tally.mention_count, term.baseline);
        let confidence =
            self.config
                .confidence(multiplier, tally.unique_source_count, tally.mention_count);

        Some(SpikeSignal {
            term: term.term.clone(),
            display_label: term.display_label.clone(),
            mention_count: tally.mention_count,
            unique_source_count: tally.unique_source_count,
            baseline_used: term.baseline,
            multiplier: round_one_decimal(multiplier),
            confidence,
            evidence: tally.evidence,
            detected_at: now,
        })
    }
}

/// Detect spikes with the default thresholds, stamped with the current time
pub fn detect_spikes(headlines: &[HeadlineRecord], terms: &[TrackedTerm]) -> Vec<SpikeSignal> {
    detect_spikes_at(headlines, terms, Utc::now())
}

/// Detect spikes with the default thresholds and an explicit `detected_at`
pub fn detect_spikes_at(
    headlines: &[HeadlineRecord],
    terms: &[TrackedTerm],
    now: DateTime<Utc>,
) -> Vec<SpikeSignal> {
    Detector::default().detect(headlines, terms, now)
}

/// Count matches for a single term
pub fn score_term(
    headlines: &[HeadlineRecord],
    term: &TrackedTerm,
    max_evidence: usize,
) -> TermTally {
    let lowered: Vec<String> = headlines.iter().map(|h| h.title.to_lowercase()).collect();
    tally(headlines, &lowered, term, max_evidence)
}

fn tally(
    headlines: &[HeadlineRecord],
    lowered: &[String],
    term: &TrackedTerm,
    max_evidence: usize,
) -> TermTally {
    let mut mention_count = 0;
    let mut sources = HashSet::new();
    let mut evidence = Vec::new();

    // Plain substring match; the trailing-space convention in the term is
    // the only word-boundary guard
    for (headline, title) in headlines.iter().zip(lowered) {
        if !title.contains(term.term.as_str()) {
            continue;
        }
        mention_count += 1;
        sources.insert(headline.source_domain.as_str());
        if evidence.len() < max_evidence {
            evidence.push(EvidenceItem::from(headline));
        }
    }

    TermTally {
        mention_count,
        unique_source_count: sources.len(),
        evidence,
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
