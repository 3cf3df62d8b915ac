#![allow(dead_code)]

use chrono::{DateTime, Utc};
use spikewatch_core::HeadlineRecord;

pub fn fixed_now() -> DateTime<Utc> {
    "2025-03-01T12:00:00Z".parse().unwrap()
}

pub fn headline(title: &str, source: &str) -> HeadlineRecord {
    HeadlineRecord::new(title, source, format!("https://{}/{}", source, title.replace(' ', "-")))
}

/// `mentions` headlines containing `word`, spread round-robin over `sources` outlets
pub fn spike(word: &str, mentions: usize, sources: usize) -> Vec<HeadlineRecord> {
    (0..mentions)
        .map(|i| {
            headline(
                &format!("Update {} on {} developments", i, word),
                &format!("outlet{}.com", i % sources),
            )
        })
        .collect()
}

/// Headlines that match none of the test terms
pub fn filler(count: usize) -> Vec<HeadlineRecord> {
    (0..count)
        .map(|i| headline(&format!("Sports roundup number {}", i), "sports.example"))
        .collect()
}
