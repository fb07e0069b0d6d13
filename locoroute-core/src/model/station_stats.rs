use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// visit statistics for one station across a set of locomotives.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StationStats {
    pub station_id: String,
    /// number of trips that passed the station, counted once per trip
    pub visit_count: usize,
    pub locomotive_keys: IndexSet<String>,
    /// `visit_count` relative to the busiest station, in [0, 1]
    pub popularity: f64,
}

impl StationStats {
    pub fn new(station_id: &str) -> StationStats {
        StationStats {
            station_id: station_id.to_string(),
            visit_count: 0,
            locomotive_keys: IndexSet::new(),
            popularity: 0.0,
        }
    }
}
