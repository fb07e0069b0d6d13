use crate::algorithm::collapse_stops;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// one outbound-and-return movement of a locomotive, bounded by depot visits.
/// trips are built by the segmenter and never modified afterward.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    /// time of the closing depot visit. incomplete trips have none.
    pub end_time: Option<NaiveDateTime>,
    /// raw station readings, consecutive repeats included
    pub stations: Vec<String>,
    /// stations with stops collapsed
    pub route: Vec<String>,
    pub complete: bool,
}

impl Trip {
    /// a trip that closed by returning to its depot at `end_time`.
    pub fn new_complete(
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        stations: Vec<String>,
    ) -> Trip {
        let route = collapse_stops(&stations);
        Trip {
            start_time,
            end_time: Some(end_time),
            stations,
            route,
            complete: true,
        }
    }

    /// a trailing trip that never returned to its depot.
    pub fn new_incomplete(start_time: NaiveDateTime, stations: Vec<String>) -> Trip {
        let route = collapse_stops(&stations);
        Trip {
            start_time,
            end_time: None,
            stations,
            route,
            complete: false,
        }
    }

    /// last station of the stop-collapsed route.
    pub fn terminal(&self) -> Option<&String> {
        self.route.last()
    }

    pub fn starts_at(&self, station_id: &str) -> bool {
        self.route.first().map(|s| s == station_id).unwrap_or(false)
    }
}
