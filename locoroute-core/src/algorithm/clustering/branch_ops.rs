use super::{is_similar_core, ClusterParameters, PathCluster};
use crate::algorithm::core_path;
use crate::model::{Branch, Trip};
use indexmap::IndexMap;
use itertools::Itertools;

/// discovers the branches of one depot from the trips of its locomotives.
///
/// trip routes (stops already collapsed) shorter than two stations are
/// skipped. paths are clustered in the iteration order of
/// `trips_by_locomotive`, which makes the result reproducible for a given
/// input order. the returned branches are ranked by station count, longest
/// first; equal lengths keep cluster order.
pub fn cluster_branches(
    depot_id: &str,
    trips_by_locomotive: &IndexMap<&str, &[Trip]>,
    params: &ClusterParameters,
) -> Vec<Branch> {
    let mut skipped = 0;
    let mut paths: Vec<Vec<String>> = vec![];
    for trip in trips_by_locomotive.values().flat_map(|trips| trips.iter()) {
        if trip.route.len() < 2 {
            skipped += 1;
        } else {
            paths.push(trip.route.clone());
        }
    }
    if skipped > 0 {
        log::debug!("depot {depot_id}: skipped {skipped} trips with fewer than 2 stations");
    }

    let clusters = cluster_paths(paths, depot_id, params);
    log::debug!("depot {depot_id}: {} path clusters", clusters.len());

    clusters
        .into_iter()
        .filter(|c| !c.is_empty())
        .filter_map(|cluster| {
            let core_stations = canonical_order(cluster.paths(), depot_id, params);
            if core_stations.is_empty() {
                None
            } else {
                Some(Branch::new(depot_id, core_stations, cluster.into_paths()))
            }
        })
        .sorted_by(|a, b| b.length.cmp(&a.length))
        .collect_vec()
}

/// greedy single-pass clustering. each path joins the first cluster whose
/// opening path is similar to it, otherwise it opens a new cluster. paths
/// shorter than two stations or with an empty core are dropped.
pub fn cluster_paths(
    paths: Vec<Vec<String>>,
    depot_id: &str,
    params: &ClusterParameters,
) -> Vec<PathCluster> {
    let mut clusters: Vec<PathCluster> = vec![];
    for path in paths.into_iter() {
        if path.len() < 2 {
            continue;
        }
        let core = core_path(&path, depot_id);
        if core.is_empty() {
            continue;
        }
        let matched = clusters
            .iter_mut()
            .find(|c| is_similar_core(&core, c.representative_core(), params.prefix_length));
        match matched {
            Some(cluster) => cluster.push(path),
            None => clusters.push(PathCluster::new(path, depot_id)),
        }
    }
    clusters
}

/// orders the stations of a cluster by their average position along the
/// member paths.
///
/// positions are 0-based indices within each path's core (depot removed,
/// repeats removed). equal averages keep first-seen order. when more than
/// `max_core_stations` stations remain, only those present in at least half
/// of the member paths (integer division) are kept, unless none qualify.
pub fn canonical_order(
    paths: &[Vec<String>],
    depot_id: &str,
    params: &ClusterParameters,
) -> Vec<String> {
    let mut positions: IndexMap<String, (usize, usize)> = IndexMap::new();
    for path in paths.iter() {
        for (idx, station) in core_path(path, depot_id).into_iter().enumerate() {
            let (sum, n) = positions.entry(station).or_insert((0, 0));
            *sum += idx;
            *n += 1;
        }
    }

    let ordered = positions
        .into_iter()
        .map(|(station, (sum, n))| (station, sum as f64 / n as f64))
        .sorted_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(station, _)| station)
        .collect_vec();

    if ordered.len() <= params.max_core_stations {
        return ordered;
    }

    let threshold = paths.len() / 2;
    let frequent = ordered
        .iter()
        .filter(|station| paths.iter().filter(|p| p.contains(*station)).count() >= threshold)
        .cloned()
        .collect_vec();
    if frequent.is_empty() {
        ordered
    } else {
        frequent
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;

    fn path(stations: &[&str]) -> Vec<String> {
        stations.iter().map(|s| s.to_string()).collect()
    }

    fn trip(stations: &[&str]) -> Trip {
        let t = NaiveDate::from_ymd_opt(2025, 2, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        Trip::new_complete(t, t, path(stations))
    }

    #[test]
    fn test_divergent_prefix_opens_separate_clusters() {
        let paths = vec![
            path(&["9400", "9401", "9402", "9500"]),
            path(&["9400", "9401", "9403", "9500"]),
        ];
        let clusters = cluster_paths(paths, "9400", &ClusterParameters::default());
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].representative_core(), path(&["9401", "9402", "9500"]));
        assert_eq!(clusters[1].representative_core(), path(&["9401", "9403", "9500"]));
    }

    #[test]
    fn test_compares_against_first_member_only() {
        // b is similar to a, c is similar to b but not to a
        let a = path(&["9400", "1", "2", "3", "4"]);
        let b = path(&["9400", "1", "2", "3", "5", "4"]);
        let c = path(&["9400", "1", "2", "3", "5"]);
        let clusters = cluster_paths(vec![a, b, c], "9400", &ClusterParameters::default());
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].len(), 2);
        assert_eq!(clusters[1].len(), 1);
    }

    #[test]
    fn test_drops_depot_only_and_short_paths() {
        let paths = vec![path(&["9400"]), path(&["9400", "9400"]), path(&["9400", "9401"])];
        let clusters = cluster_paths(paths, "9400", &ClusterParameters::default());
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].paths(), &[path(&["9400", "9401"])]);
    }

    #[test]
    fn test_canonical_order_averages_positions() {
        let paths = vec![
            path(&["9400", "a", "b", "c", "9400"]),
            path(&["9400", "b", "a", "c", "9400"]),
            path(&["9400", "a", "c", "9400"]),
        ];
        // a: (0 + 1 + 0) / 3, b: (1 + 0) / 2, c: (2 + 2 + 1) / 3
        let order = canonical_order(&paths, "9400", &ClusterParameters::default());
        assert_eq!(order, path(&["a", "b", "c"]));
    }

    #[test]
    fn test_canonical_order_equal_average_keeps_first_seen() {
        let paths = vec![path(&["9400", "b", "a"]), path(&["9400", "a", "b"])];
        let order = canonical_order(&paths, "9400", &ClusterParameters::default());
        assert_eq!(order, path(&["b", "a"]));
    }

    /// one long path through `n` distinct stations plus three short paths
    /// sharing its first two stations.
    fn long_branch(n: usize) -> (Vec<Vec<String>>, Vec<String>) {
        let stations = (0..n).map(|i| format!("s{i:02}")).collect::<Vec<_>>();
        let mut long = vec![String::from("9400")];
        long.extend(stations.iter().cloned());
        let short = vec![String::from("9400"), stations[0].clone(), stations[1].clone()];
        let paths = vec![long, short.clone(), short.clone(), short];
        (paths, stations)
    }

    #[test]
    fn test_canonical_order_default_cap_keeps_twenty_stations() {
        let (paths, stations) = long_branch(20);
        let order = canonical_order(&paths, "9400", &ClusterParameters::default());
        assert_eq!(order, stations);
    }

    #[test]
    fn test_canonical_order_default_cap_filters_twenty_one_stations() {
        let (paths, stations) = long_branch(21);
        let order = canonical_order(&paths, "9400", &ClusterParameters::default());
        // threshold is 4 / 2 = 2, only the two shared stations qualify
        assert_eq!(order, stations[..2].to_vec());
    }

    #[test]
    fn test_canonical_order_filters_rare_stations_on_long_branches() {
        let params = ClusterParameters {
            prefix_length: 3,
            max_core_stations: 3,
        };
        let paths = vec![
            path(&["9400", "a", "b", "c", "x"]),
            path(&["9400", "a", "b", "c", "y"]),
            path(&["9400", "a", "b", "c", "z"]),
            path(&["9400", "a", "b", "c"]),
        ];
        let order = canonical_order(&paths, "9400", &params);
        // threshold is 4 / 2 = 2, each of x, y, z appears once
        assert_eq!(order, path(&["a", "b", "c"]));
    }

    #[test]
    fn test_canonical_order_keeps_all_when_filter_empties() {
        let params = ClusterParameters {
            prefix_length: 3,
            max_core_stations: 1,
        };
        let paths = vec![
            path(&["9400", "a", "b"]),
            path(&["9400", "c", "d"]),
            path(&["9400", "e", "f"]),
            path(&["9400", "g", "h"]),
            path(&["9400", "i", "j"]),
        ];
        // threshold is 5 / 2 = 2, every station appears once
        let order = canonical_order(&paths, "9400", &params);
        assert_eq!(order.len(), 10);
    }

    #[test]
    fn test_cluster_branches_ranks_by_length() {
        let short = [trip(&["9400", "9601", "9400"])];
        let long = [
            trip(&["9400", "9401", "9402", "9403", "9400"]),
            trip(&["9400", "9401", "9401", "9402", "9403", "9400"]),
            trip(&["9400"]),
        ];
        let mut trips: IndexMap<&str, &[Trip]> = IndexMap::new();
        trips.insert("A", &short);
        trips.insert("B", &long);
        let branches = cluster_branches("9400", &trips, &ClusterParameters::default());
        assert_eq!(branches.len(), 2);
        assert_eq!(branches[0].branch_id, "9401_to_9403");
        assert_eq!(branches[0].length, 3);
        assert_eq!(branches[0].all_paths.len(), 2);
        assert_eq!(branches[0].terminals.get("9400"), Some(&2));
        assert_eq!(branches[1].branch_id, "9601");
        for branch in branches.iter() {
            assert!(!branch.core_stations.iter().any(|s| s == "9400"));
            let eligible = branch.all_paths.iter().filter(|p| p.len() > 1).count();
            assert_eq!(branch.terminal_visits(), eligible);
        }
    }

    #[test]
    fn test_cluster_branches_empty_depot() {
        let trips: IndexMap<&str, &[Trip]> = IndexMap::new();
        assert!(cluster_branches("9400", &trips, &ClusterParameters::default()).is_empty());
    }
}
