//! On-disk state for spike detection runs: paths, the signal log record, JSONL I/O

mod io;
mod paths;
mod types;

pub use io::{append_jsonl, atomic_write, read_jsonl};
pub use paths::{Paths, PathsError, HOME_ENV};
pub use types::SignalRecord;
