//! Cross-run bookkeeping layered over the pure detector

pub mod log;
pub mod seen;

pub use log::{to_record, SignalLog};
pub use seen::{window_start, SeenEntry, SeenSet};
