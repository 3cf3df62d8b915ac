//! Keyword-spike detection over headline snapshots

mod config;
mod detector;
mod summary;
mod types;
mod watchlist;

pub use config::{ConfidenceWeights, DetectorConfig};
pub use detector::{detect_spikes, detect_spikes_at, score_term, Detector, TermTally};
pub use summary::build_summary;
pub use types::{EvidenceItem, HeadlineRecord, SpikeSignal, TrackedTerm};
pub use watchlist::{Watchlist, WatchlistError};
