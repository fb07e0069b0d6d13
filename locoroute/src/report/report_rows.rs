use locoroute_core::model::{Branch, Locomotive, LocomotiveDirectionStats, StationStats, Trip};
use serde::Serialize;

/// the trips of one locomotive, without its raw visit records.
#[derive(Debug, Serialize)]
pub struct LocomotiveTrips<'a> {
    pub locomotive_key: &'a str,
    pub depot_id: &'a str,
    pub trips: &'a [Trip],
}

impl<'a> From<&'a Locomotive> for LocomotiveTrips<'a> {
    fn from(value: &'a Locomotive) -> Self {
        LocomotiveTrips {
            locomotive_key: &value.key,
            depot_id: &value.depot_id,
            trips: &value.trips,
        }
    }
}

/// how often a branch path ended at a station.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TerminalCount {
    pub station_id: String,
    pub count: usize,
}

/// condensed view of a [`Branch`]: its most frequent terminals and one
/// member path as an example.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BranchRow {
    pub branch_id: String,
    pub length: usize,
    pub paths: usize,
    pub core_stations: Vec<String>,
    pub top_terminals: Vec<TerminalCount>,
    pub example_path: Vec<String>,
}

impl BranchRow {
    pub const TOP_TERMINALS: usize = 5;
}

impl From<&Branch> for BranchRow {
    fn from(value: &Branch) -> Self {
        BranchRow {
            branch_id: value.branch_id.clone(),
            length: value.length,
            paths: value.all_paths.len(),
            core_stations: value.core_stations.clone(),
            top_terminals: value
                .top_terminals(BranchRow::TOP_TERMINALS)
                .into_iter()
                .map(|(station_id, count)| TerminalCount {
                    station_id: station_id.clone(),
                    count,
                })
                .collect(),
            example_path: value.all_paths.first().cloned().unwrap_or_default(),
        }
    }
}

/// flat form of [`StationStats`] for CSV output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationRow {
    pub station_id: String,
    pub visit_count: usize,
    pub locomotives: usize,
    pub popularity: f64,
}

impl From<&StationStats> for StationRow {
    fn from(value: &StationStats) -> Self {
        StationRow {
            station_id: value.station_id.clone(),
            visit_count: value.visit_count,
            locomotives: value.locomotive_keys.len(),
            popularity: value.popularity,
        }
    }
}

/// flat form of [`LocomotiveDirectionStats`] for CSV output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileRow {
    pub locomotive_key: String,
    pub series: String,
    pub number: String,
    pub depot_id: String,
    pub total_trips: usize,
    pub directions: usize,
    pub most_popular_direction_id: String,
    pub max_visits: usize,
    pub favorite_percent: f64,
}

impl From<&LocomotiveDirectionStats> for ProfileRow {
    fn from(value: &LocomotiveDirectionStats) -> Self {
        ProfileRow {
            locomotive_key: value.locomotive_key.clone(),
            series: value.series.clone(),
            number: value.number.clone(),
            depot_id: value.depot_id.clone(),
            total_trips: value.total_trips,
            directions: value.visits_by_direction.len(),
            most_popular_direction_id: value.most_popular_direction_id.clone(),
            max_visits: value.max_visits,
            favorite_percent: value.percentage_of(&value.most_popular_direction_id),
        }
    }
}
