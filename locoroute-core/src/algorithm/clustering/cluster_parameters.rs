use serde::{Deserialize, Serialize};

/// tunables for grouping trip paths into branches.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterParameters {
    /// number of leading core stations two paths must share
    pub prefix_length: usize,
    /// canonical orderings longer than this are reduced to frequent stations
    pub max_core_stations: usize,
}

impl Default for ClusterParameters {
    fn default() -> Self {
        Self {
            prefix_length: 3,
            max_core_stations: 20,
        }
    }
}
