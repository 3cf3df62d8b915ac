mod common;

use common::{filler, fixed_now, headline, spike};
use spikewatch_core::{detect_spikes_at, TrackedTerm};

#[test]
fn test_single_term_spike_across_three_sources() {
    let mut headlines = filler(44);
    headlines.extend([
        headline("Iran launches drones", "reuters.com"),
        headline("Iran warns of escalation", "apnews.com"),
        headline("Oil jumps on Iran fears", "ft.com"),
        headline("Iran talks stall", "reuters.com"),
        headline("Analysts weigh Iran risk", "apnews.com"),
        headline("Iran sanctions expected", "ft.com"),
    ]);
    assert_eq!(headlines.len(), 50);

    let terms = [TrackedTerm::new("iran", "Iran", 1.0)];
    let signals = detect_spikes_at(&headlines, &terms, fixed_now());

    assert_eq!(signals.len(), 1);
    let signal = &signals[0];
    assert_eq!(signal.mention_count, 6);
    assert_eq!(signal.unique_source_count, 3);
    assert_eq!(signal.multiplier, 6.0);
    // 0.3 (multiplier) + 0.15 (sources) + 0.2 (volume, capped)
    assert_eq!(signal.confidence, 65);
    assert_eq!(signal.evidence.len(), 6);
}

#[test]
fn test_two_mentions_never_spike() {
    let headlines = vec![
        headline("Taiwan holds drills", "reuters.com"),
        headline("Taiwan chip exports rise", "ft.com"),
    ];
    let signals = detect_spikes_at(
        &headlines,
        &[TrackedTerm::new("taiwan", "Taiwan", 0.5)],
        fixed_now(),
    );
    assert!(signals.is_empty());
}

#[test]
fn test_zero_baseline_uses_mention_factor() {
    let headlines = spike("ransomware", 4, 2);
    let signals = detect_spikes_at(
        &headlines,
        &[TrackedTerm::new("ransomware", "Ransomware", 0.0)],
        fixed_now(),
    );

    assert_eq!(signals.len(), 1);
    assert_eq!(signals[0].multiplier, 40.0);
    // 0.5 (multiplier, capped) + 0.1 (sources) + 0.2 (volume, capped)
    assert_eq!(signals[0].confidence, 80);
}

#[test]
fn test_output_truncated_to_top_six() {
    let words = [
        "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel", "india", "juliet",
    ];
    let mut headlines = Vec::new();
    let mut terms = Vec::new();
    for (k, word) in words.iter().enumerate() {
        headlines.extend(spike(word, 3 + k, 2));
        terms.push(TrackedTerm::new(*word, word.to_uppercase(), 1.0));
    }

    let signals = detect_spikes_at(&headlines, &terms, fixed_now());

    assert_eq!(signals.len(), 6);
    let ranked: Vec<&str> = signals.iter().map(|s| s.term.as_str()).collect();
    // juliet/india/hotel tie at 80 and fall back to multiplier order
    assert_eq!(ranked, ["juliet", "india", "hotel", "golf", "foxtrot", "echo"]);
    let confidences: Vec<u8> = signals.iter().map(|s| s.confidence).collect();
    assert_eq!(confidences, [80, 80, 80, 75, 70, 65]);
}
