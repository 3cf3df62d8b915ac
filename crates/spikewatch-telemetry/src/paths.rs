//! Path resolution for spikewatch data files

use std::path::{Path, PathBuf};

/// Overrides the data directory when set
pub const HOME_ENV: &str = "SPIKEWATCH_HOME";

#[derive(Debug, thiserror::Error)]
pub enum PathsError {
    #[error("home directory not found; set SPIKEWATCH_HOME to choose a data directory")]
    NoHome,
}

/// Resolves standard paths under the data directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub root: PathBuf,
}

impl Paths {
    /// `$SPIKEWATCH_HOME`, or `~/.spikewatch`
    pub fn new() -> Result<Self, PathsError> {
        if let Some(custom) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::from_root(custom));
        }

        let home = dirs::home_dir().ok_or(PathsError::NoHome)?;
        Ok(Self::from_root(home.join(".spikewatch")))
    }

    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// User-editable watchlist
    pub fn watchlist_file(&self) -> PathBuf {
        self.root.join("watchlist.json")
    }

    /// Append-only log of emitted signals
    pub fn signals_file(&self) -> PathBuf {
        self.root.join("signals.jsonl")
    }

    /// Already-reported (term, window) pairs
    pub fn seen_file(&self) -> PathBuf {
        self.root.join("seen.json")
    }
}
