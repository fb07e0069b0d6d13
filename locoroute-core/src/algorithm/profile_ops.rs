use super::MatchParameters;
use crate::model::{Direction, Locomotive, LocomotiveDirectionStats};
use std::collections::HashSet;

/// counts how often a locomotive travelled each direction of its depot and
/// picks its favorite.
///
/// each trip with a stop-collapsed route of at least two stations is matched
/// with [`match_direction`] and counted at most once. unmatched trips still
/// count towards `total_trips`.
pub fn profile_locomotive(
    locomotive: &Locomotive,
    depot_directions: &[Direction],
    params: &MatchParameters,
) -> LocomotiveDirectionStats {
    let mut stats = LocomotiveDirectionStats::new(locomotive);
    let mut unmatched = 0;
    for trip in locomotive.trips.iter().filter(|t| t.route.len() >= 2) {
        match match_direction(&trip.route, depot_directions, params) {
            Some(direction) => stats.record_visit(&direction.id),
            None => unmatched += 1,
        }
    }
    if unmatched > 0 {
        log::debug!(
            "locomotive {}: {unmatched} trips matched no direction of depot {}",
            locomotive.key,
            locomotive.depot_id
        );
    }
    stats.finalize();
    stats
}

/// finds the direction a route belongs to.
///
/// a direction ending at the route's last station is an exact match.
/// otherwise the direction with the highest [`jaccard_similarity`] wins,
/// the earliest in `directions` on ties, provided the score is above
/// `params.min_similarity`.
pub fn match_direction<'a>(
    route: &[String],
    directions: &'a [Direction],
    params: &MatchParameters,
) -> Option<&'a Direction> {
    let terminal = route.last()?;
    if let Some(exact) = directions
        .iter()
        .find(|d| &d.terminal_station_id == terminal)
    {
        return Some(exact);
    }

    let mut best: Option<(&Direction, usize)> = None;
    for direction in directions.iter() {
        let score = jaccard_similarity(route, &direction.route_stations);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((direction, score)),
        }
    }
    best.filter(|(_, score)| *score > params.min_similarity)
        .map(|(direction, _)| direction)
}

/// size of the intersection over the size of the union of the two station
/// sets, scaled to [0, 100] and truncated. two empty routes score 0.
pub fn jaccard_similarity(a: &[String], b: &[String]) -> usize {
    let set_a: HashSet<&String> = a.iter().collect();
    let set_b: HashSet<&String> = b.iter().collect();
    let union = set_a.union(&set_b).count();
    if union == 0 {
        return 0;
    }
    let intersection = set_a.intersection(&set_b).count();
    intersection * 100 / union
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithm::build_directions;
    use crate::model::Trip;
    use chrono::NaiveDate;
    use indexmap::{IndexMap, IndexSet};

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

    fn direction(terminal: &str, route: &[&str]) -> Direction {
        Direction {
            id: format!("9400_dir_{terminal}"),
            depot_id: String::from("9400"),
            terminal_station_id: terminal.to_string(),
            route_stations: path(route),
            frequency: 1,
            locomotive_keys: IndexSet::new(),
        }
    }

    #[test]
    fn test_jaccard() {
        let a = path(&["1", "2", "3"]);
        let b = path(&["2", "3", "4"]);
        // 2 shared of 4 total
        assert_eq!(jaccard_similarity(&a, &b), 50);
        assert_eq!(jaccard_similarity(&a, &a), 100);
        assert_eq!(jaccard_similarity(&[], &[]), 0);
        // 1 shared of 3 total truncates to 33
        assert_eq!(jaccard_similarity(&path(&["1", "2"]), &path(&["2", "3"])), 33);
    }

    #[test]
    fn test_exact_match_wins_over_better_fuzzy() {
        let directions = vec![
            direction("9403", &["9400", "9401", "9402", "9403"]),
            direction("9500", &["9400", "9500"]),
        ];
        let route = path(&["9400", "9401", "9402", "9500"]);
        let found = match_direction(&route, &directions, &MatchParameters::default());
        assert_eq!(found.map(|d| d.terminal_station_id.as_str()), Some("9500"));
    }

    #[test]
    fn test_fuzzy_requires_score_above_threshold() {
        let directions = vec![direction("9403", &["9400", "9401", "9402", "9403"])];
        // 3 shared of 5 total = 60
        let close = path(&["9400", "9401", "9402", "9404"]);
        assert!(match_direction(&close, &directions, &MatchParameters::default()).is_some());
        // 2 shared of 5 total = 40
        let far = path(&["9400", "9401", "9404"]);
        assert_eq!(jaccard_similarity(&far, &directions[0].route_stations), 40);
        assert!(match_direction(&far, &directions, &MatchParameters::default()).is_none());
        // 3 shared of 6 total = 50, not above 50
        let half = path(&["9400", "9401", "9402"]);
        let half_dirs = vec![direction("9403", &["9400", "9401", "9402", "9403", "9405", "9406"])];
        assert_eq!(jaccard_similarity(&half, &half_dirs[0].route_stations), 50);
        assert!(match_direction(&half, &half_dirs, &MatchParameters::default()).is_none());
    }

    #[test]
    fn test_fuzzy_ties_pick_first_direction() {
        let directions = vec![
            direction("9501", &["9400", "9401", "9402", "9501"]),
            direction("9502", &["9400", "9401", "9402", "9502"]),
        ];
        let route = path(&["9400", "9401", "9402", "9503"]);
        let found = match_direction(&route, &directions, &MatchParameters::default());
        assert_eq!(found.map(|d| d.id.as_str()), Some("9400_dir_9501"));
    }

    #[test]
    fn test_profile_counts_repeat_trips() {
        let a_trips = vec![
            trip(&["9400", "9401", "9600"]),
            trip(&["9400", "9401", "9600"]),
            trip(&["9400", "9401", "9600"]),
        ];
        let b_trips = vec![trip(&["9400", "9401", "9600"])];
        let mut trips: IndexMap<&str, &[Trip]> = IndexMap::new();
        trips.insert("TE-A", &a_trips);
        trips.insert("TE-B", &b_trips);
        let directions = build_directions("9400", &trips);

        let loco = Locomotive::from_trips("TE", "A", "9400", a_trips.clone());
        let stats = profile_locomotive(&loco, &directions, &MatchParameters::default());
        assert_eq!(stats.total_trips, 3);
        assert_eq!(stats.visits_by_direction.get("9400_dir_9600"), Some(&3));
        assert_eq!(stats.most_popular_direction_id, "9400_dir_9600");
        assert_eq!(stats.max_visits, 3);
    }

    #[test]
    fn test_profile_without_matchable_trips() {
        let trips = vec![trip(&["9401", "9402"]), trip(&["9400"])];
        let loco = Locomotive::from_trips("TE", "A", "9400", trips);
        let stats = profile_locomotive(&loco, &[], &MatchParameters::default());
        assert_eq!(stats.total_trips, 2);
        assert_eq!(stats.most_popular_direction_id, "");
        assert_eq!(stats.max_visits, 0);
        assert!(stats.visits_by_direction.is_empty());
    }

    #[test]
    fn test_profile_counts_trips_not_leaving_depot() {
        let directions = vec![direction("9600", &["9400", "9401", "9600"])];
        let trips = vec![trip(&["9401", "9600"]), trip(&["9600", "9401", "9400"])];
        let loco = Locomotive::from_trips("TE", "A", "9400", trips);
        let stats = profile_locomotive(&loco, &directions, &MatchParameters::default());
        // exact terminal match, then identical station sets
        assert_eq!(stats.visits_by_direction.get("9400_dir_9600"), Some(&2));
        assert!(stats.visits_by_direction.values().all(|v| *v <= stats.total_trips));
    }
}
