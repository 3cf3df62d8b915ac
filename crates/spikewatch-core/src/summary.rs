//! One-line summaries of signal evidence

use crate::types::EvidenceItem;
use regex::Regex;
use std::sync::OnceLock;

const SUMMARY_HEADLINES: usize = 3;
const SEPARATOR: &str = " — ";

static WHITESPACE_RE: OnceLock<Regex> = OnceLock::new();

/// Join the first few evidence titles into a single display line
pub fn build_summary(evidence: &[EvidenceItem]) -> String {
    let re = WHITESPACE_RE.get_or_init(|| Regex::new(r"\s+").unwrap());
    evidence
        .iter()
        .take(SUMMARY_HEADLINES)
        .map(|item| re.replace_all(&item.title, " ").trim().to_string())
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}
