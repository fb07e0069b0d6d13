use locoroute_core::model::{Branch, Direction, LocomotiveDirectionStats};
use serde::{Deserialize, Serialize};

/// branches, directions and locomotive profiles discovered for one depot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DepotAnalysis {
    pub depot_id: String,
    pub label: String,
    pub branches: Vec<Branch>,
    pub directions: Vec<Direction>,
    /// ordered by locomotive key
    pub profiles: Vec<LocomotiveDirectionStats>,
}

impl DepotAnalysis {
    pub fn total_trips(&self) -> usize {
        self.profiles.iter().map(|p| p.total_trips).sum()
    }
}
