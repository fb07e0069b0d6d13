//! station sequence transforms shared by clustering and direction building.
use std::collections::HashSet;

/// removes stops: any station equal to the station immediately before it.
/// non-adjacent repeats are kept.
pub fn collapse_stops(path: &[String]) -> Vec<String> {
    let mut result: Vec<String> = Vec::with_capacity(path.len());
    for station in path.iter() {
        if result.last() != Some(station) {
            result.push(station.clone());
        }
    }
    result
}

/// the depot-free, fully de-duplicated station list of a path in first
/// occurrence order. only used to compare paths while clustering.
pub fn core_path(path: &[String], depot_id: &str) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut core: Vec<String> = vec![];
    for station in path.iter() {
        if station.as_str() != depot_id && seen.insert(station.as_str()) {
            core.push(station.clone());
        }
    }
    core
}
