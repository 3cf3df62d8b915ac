//! Configuration for spike detection

use serde::{Deserialize, Serialize};

/// Divisors and caps for the three confidence components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceWeights {
    pub multiplier_divisor: f64,
    pub multiplier_cap: f64,
    pub source_divisor: f64,
    pub source_cap: f64,
    pub volume_divisor: f64,
    pub volume_cap: f64,
}

impl ConfidenceWeights {
    pub fn new() -> Self {
        Self {
            multiplier_divisor: 20.0,
            multiplier_cap: 0.5,
            source_divisor: 20.0,
            source_cap: 0.3,
            volume_divisor: 15.0,
            volume_cap: 0.2,
        }
    }

    /// Sum of the capped components, on a 0..1 scale
    pub fn combine(&self, multiplier: f64, unique_sources: usize, mentions: usize) -> f64 {
        let multiplier_part = (multiplier / self.multiplier_divisor).min(self.multiplier_cap);
        let source_part = (unique_sources as f64 / self.source_divisor).min(self.source_cap);
        let volume_part = (mentions as f64 / self.volume_divisor).min(self.volume_cap);
        multiplier_part + source_part + volume_part
    }
}

impl Default for ConfidenceWeights {
    fn default() -> Self {
        Self::new()
    }
}

/// Detector configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Minimum matching headlines
    pub min_mentions: usize,

    /// Minimum distinct sources among matches
    pub min_sources: usize,

    /// Minimum mentions / baseline ratio
    pub min_multiplier: f64,

    /// Multiplier factor used when a term has no positive baseline
    pub zero_baseline_factor: f64,

    /// Max evidence headlines per signal
    pub max_evidence: usize,

    /// Max signals returned
    pub max_signals: usize,

    /// Ceiling on the 0-100 confidence score
    pub confidence_cap: u8,

    pub weights: ConfidenceWeights,
}

impl DetectorConfig {
    pub fn new() -> Self {
        Self {
            min_mentions: 3,
            min_sources: 2,
            min_multiplier: 2.0,
            zero_baseline_factor: 10.0,
            max_evidence: 6,
            max_signals: 6,
            confidence_cap: 98,
            weights: ConfidenceWeights::new(),
        }
    }

    /// Multiplier for a term given its mention count and baseline.
    ///
    /// Non-positive (or NaN) baselines fall back to `mentions * zero_baseline_factor`.
    pub fn multiplier(&self, mentions: usize, baseline: f64) -> f64 {
        if baseline > 0.0 {
            mentions as f64 / baseline
        } else {
            mentions as f64 * self.zero_baseline_factor
        }
    }

    /// Integer confidence, rounded and capped
    pub fn confidence(&self, multiplier: f64, unique_sources: usize, mentions: usize) -> u8 {
        let raw = (self.weights.combine(multiplier, unique_sources, mentions) * 100.0).round();
        raw.clamp(0.0, f64::from(self.confidence_cap)) as u8
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self::new()
    }
}
