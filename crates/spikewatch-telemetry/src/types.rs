//! Signal log record types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One emitted spike, as persisted in `signals.jsonl`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalRecord {
    pub window_start: DateTime<Utc>,
    pub term: String,
    pub display_label: String,
    pub confidence: u8,
    pub multiplier: f64,
    pub mention_count: usize,
    pub unique_source_count: usize,
    #[serde(default)]
    pub summary: String,
    pub detected_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_record_roundtrip() {
        let record = SignalRecord {
            window_start: "2025-03-01T00:00:00Z".parse().unwrap(),
            term: "iran".to_string(),
            display_label: "Iran".to_string(),
            confidence: 65,
            multiplier: 6.0,
            mention_count: 6,
            unique_source_count: 3,
            summary: "a — b — c".to_string(),
            detected_at: Utc::now(),
        };

        let json = serde_json::to_string(&record).unwrap();
        let parsed: SignalRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, parsed);
    }

    #[test]
    fn test_signal_record_summary_optional() {
        let json = r#"{"window_start":"2025-03-01T00:00:00Z","term":"oil ","display_label":"Oil","confidence":40,"multiplier":3.0,"mention_count":3,"unique_source_count":2,"detected_at":"2025-03-01T10:00:00Z"}"#;
        let parsed: SignalRecord = serde_json::from_str(json).unwrap();
        assert!(parsed.summary.is_empty());
        assert_eq!(parsed.term, "oil ");
    }
}
