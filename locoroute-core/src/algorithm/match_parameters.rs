use serde::{Deserialize, Serialize};

/// tunables for assigning a trip to one of its depot's directions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchParameters {
    /// a fuzzy match needs a station-set similarity strictly above this, in [0, 100]
    pub min_similarity: usize,
}

impl Default for MatchParameters {
    fn default() -> Self {
        Self { min_similarity: 50 }
    }
}
