//! Validated watchlist of tracked terms

use crate::types::TrackedTerm;
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum WatchlistError {
    #[error("watchlist has no terms")]
    Empty,
    #[error("watchlist entry {index} has an empty term")]
    EmptyTerm { index: usize },
    #[error("term {term:?} must be lowercase")]
    NotLowercase { term: String },
    #[error("term {term:?} has invalid baseline {baseline} (must be finite and >= 0)")]
    InvalidBaseline { term: String, baseline: f64 },
    #[error("term {term:?} appears more than once")]
    Duplicate { term: String },
    #[error("failed to parse watchlist: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read watchlist: {0}")]
    Io(#[from] std::io::Error),
}

/// Immutable, validated set of terms for one detection run
#[derive(Debug, Clone, PartialEq)]
pub struct Watchlist {
    terms: Vec<TrackedTerm>,
}

impl Watchlist {
    pub fn new(terms: Vec<TrackedTerm>) -> Result<Self, WatchlistError> {
        if terms.is_empty() {
            return Err(WatchlistError::Empty);
        }

        let mut seen = HashSet::new();
        for (index, term) in terms.iter().enumerate() {
            if term.term.trim().is_empty() {
                return Err(WatchlistError::EmptyTerm { index });
            }
            if term.term != term.term.to_lowercase() {
                return Err(WatchlistError::NotLowercase {
                    term: term.term.clone(),
                });
            }
            if !term.baseline.is_finite() || term.baseline < 0.0 {
                return Err(WatchlistError::InvalidBaseline {
                    term: term.term.clone(),
                    baseline: term.baseline,
                });
            }
            if !seen.insert(term.term.as_str()) {
                return Err(WatchlistError::Duplicate {
                    term: term.term.clone(),
                });
            }
        }

        Ok(Self { terms })
    }

    /// Parse a JSON array of terms
    pub fn from_json(json: &str) -> Result<Self, WatchlistError> {
        let terms: Vec<TrackedTerm> = serde_json::from_str(json)?;
        Self::new(terms)
    }

    pub fn load(path: &Path) -> Result<Self, WatchlistError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.terms)
    }

    pub fn terms(&self) -> &[TrackedTerm] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    fn builtin() -> Vec<TrackedTerm> {
        [
            ("iran", "Iran", 1.0),
            ("israel", "Israel", 3.0),
            ("ukraine", "Ukraine", 3.0),
            ("russia", "Russia", 4.0),
            ("china", "China", 5.0),
            ("taiwan", "Taiwan", 0.5),
            ("north korea", "North Korea", 0.5),
            ("fed ", "Federal Reserve", 1.0),
            ("tariff", "Tariffs", 1.0),
            ("recession", "Recession", 0.5),
            ("oil ", "Oil", 1.0),
            ("sanctions", "Sanctions", 1.0),
            ("bitcoin", "Bitcoin", 1.0),
            ("ai ", "AI", 2.0),
            ("nvidia", "Nvidia", 0.5),
            ("cyberattack", "Cyberattack", 0.0),
            ("ransomware", "Ransomware", 0.0),
            ("election", "Elections", 2.0),
        ]
        .into_iter()
        .map(|(term, label, baseline)| TrackedTerm::new(term, label, baseline))
        .collect()
    }
}

impl Default for Watchlist {
    /// Built-in editorial watchlist
    fn default() -> Self {
        Self {
            terms: Self::builtin(),
        }
    }
}

impl AsRef<[TrackedTerm]> for Watchlist {
    fn as_ref(&self) -> &[TrackedTerm] {
        &self.terms
    }
}
