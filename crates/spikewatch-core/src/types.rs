//! Core types for spike detection

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A watchlist entry: what to match, what to call it, and how often it
/// normally shows up in one look-back window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedTerm {
    /// Lowercase substring to look for. Short ambiguous terms carry a
    /// trailing space ("ai ") so they don't match inside other words.
    pub term: String,
    #[serde(alias = "displayLabel", alias = "label")]
    pub display_label: String,
    /// Expected mentions per window under normal conditions
    pub baseline: f64,
}

impl TrackedTerm {
    pub fn new(term: impl Into<String>, display_label: impl Into<String>, baseline: f64) -> Self {
        Self {
            term: term.into(),
            display_label: display_label.into(),
            baseline,
        }
    }
}

/// A headline as handed over by the news source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadlineRecord {
    pub title: String,
    #[serde(alias = "sourceDomain", alias = "domain")]
    pub source_domain: String,
    pub url: String,
    /// Informational only; the snapshot is already windowed by the caller
    #[serde(default, alias = "seenAt", alias = "seendate")]
    pub seen_at: String,
}

impl HeadlineRecord {
    pub fn new(
        title: impl Into<String>,
        source_domain: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            source_domain: source_domain.into(),
            url: url.into(),
            seen_at: String::new(),
        }
    }
}

/// Headline kept as supporting evidence for a signal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceItem {
    pub title: String,
    pub source: String,
    pub link: String,
}

impl From<&HeadlineRecord> for EvidenceItem {
    fn from(headline: &HeadlineRecord) -> Self {
        Self {
            title: headline.title.clone(),
            source: headline.source_domain.clone(),
            link: headline.url.clone(),
        }
    }
}

/// A term that is running well above its baseline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpikeSignal {
    pub term: String,
    pub display_label: String,
    pub mention_count: usize,
    pub unique_source_count: usize,
    pub baseline_used: f64,
    /// Rounded to one decimal place
    pub multiplier: f64,
    /// 0..=98
    pub confidence: u8,
    /// Matching headlines in encounter order
    pub evidence: Vec<EvidenceItem>,
    pub detected_at: DateTime<Utc>,
}
