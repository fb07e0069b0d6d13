use crate::model::{Locomotive, StationStats};
use indexmap::IndexMap;
use itertools::Itertools;
use std::collections::HashSet;

/// counts station visits across all trips of `locomotives`.
///
/// a station counts once per trip no matter how often it was read during
/// that trip. when `known_stations` is given, other stations are ignored and
/// every known station is reported, unvisited ones with a count of 0.
/// the result is ordered by visit count, busiest first, then by station id.
pub fn station_stats(
    locomotives: &[Locomotive],
    known_stations: Option<&HashSet<String>>,
) -> Vec<StationStats> {
    let mut stats: IndexMap<&str, StationStats> = IndexMap::new();
    if let Some(known) = known_stations {
        for station in known.iter().sorted() {
            stats.insert(station.as_str(), StationStats::new(station));
        }
    }
    for locomotive in locomotives.iter() {
        for trip in locomotive.trips.iter() {
            let mut seen: HashSet<&str> = HashSet::new();
            for station in trip.stations.iter() {
                if let Some(known) = known_stations {
                    if !known.contains(station) {
                        continue;
                    }
                }
                if !seen.insert(station.as_str()) {
                    continue;
                }
                let entry = stats
                    .entry(station.as_str())
                    .or_insert_with(|| StationStats::new(station));
                entry.visit_count += 1;
                entry.locomotive_keys.insert(locomotive.key.clone());
            }
        }
    }

    let max_visits = stats.values().map(|s| s.visit_count).max().unwrap_or(0);
    stats
        .into_values()
        .map(|mut s| {
            if max_visits > 0 {
                s.popularity = s.visit_count as f64 / max_visits as f64;
            }
            s
        })
        .sorted_by(|a, b| {
            b.visit_count
                .cmp(&a.visit_count)
                .then_with(|| a.station_id.cmp(&b.station_id))
        })
        .collect_vec()
}

/// keys of the `n` locomotives with the most trips, most active first. equal
/// trip counts are ordered by key.
pub fn top_locomotives(locomotives: &[Locomotive], n: usize) -> Vec<String> {
    locomotives
        .iter()
        .sorted_by(|a, b| {
            b.trips
                .len()
                .cmp(&a.trips.len())
                .then_with(|| a.key.cmp(&b.key))
        })
        .take(n)
        .map(|l| l.key.clone())
        .collect_vec()
}
