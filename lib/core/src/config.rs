use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Maximum number of matches returned per query
pub const DEFAULT_TOP_K: usize = 3;

/// Minimum cosine score a match needs to be kept
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.3;

/// Matching parameters, fixed for the lifetime of a [`crate::Matcher`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub top_k: usize,
    pub similarity_threshold: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }
}

impl MatchConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(Error::InvalidConfig(format!(
                "similarity_threshold must be within [0.0, 1.0], got {}",
                self.similarity_threshold
            )));
        }
        Ok(())
    }
}
