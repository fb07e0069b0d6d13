use super::Locomotive;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// how often one locomotive travelled each direction of its depot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocomotiveDirectionStats {
    pub locomotive_key: String,
    pub series: String,
    pub number: String,
    pub depot_id: String,
    pub total_trips: usize,
    /// matched trips per direction id, in first-matched order
    pub visits_by_direction: IndexMap<String, usize>,
    /// empty when no trip matched any direction
    pub most_popular_direction_id: String,
    pub max_visits: usize,
}

impl LocomotiveDirectionStats {
    pub fn new(locomotive: &Locomotive) -> LocomotiveDirectionStats {
        LocomotiveDirectionStats {
            locomotive_key: locomotive.key.clone(),
            series: locomotive.series.clone(),
            number: locomotive.number.clone(),
            depot_id: locomotive.depot_id.clone(),
            total_trips: locomotive.trips.len(),
            visits_by_direction: IndexMap::new(),
            most_popular_direction_id: String::new(),
            max_visits: 0,
        }
    }

    pub fn record_visit(&mut self, direction_id: &str) {
        *self
            .visits_by_direction
            .entry(direction_id.to_string())
            .or_insert(0) += 1;
    }

    /// selects the most visited direction. on equal counts the direction that
    /// was matched first wins.
    pub fn finalize(&mut self) {
        let mut best: Option<(&String, usize)> = None;
        for (id, visits) in self.visits_by_direction.iter() {
            match best {
                Some((_, max)) if *visits <= max => {}
                _ => best = Some((id, *visits)),
            }
        }
        let (id, visits) = best
            .map(|(id, visits)| (id.clone(), visits))
            .unwrap_or_default();
        self.most_popular_direction_id = id;
        self.max_visits = visits;
    }

    pub fn has_favorite(&self) -> bool {
        !self.most_popular_direction_id.is_empty()
    }

    /// share of all trips that matched `direction_id`, as a percentage.
    pub fn percentage_of(&self, direction_id: &str) -> f64 {
        let visits = self
            .visits_by_direction
            .get(direction_id)
            .copied()
            .unwrap_or_default();
        percentage(visits, self.total_trips)
    }
}

/// `part` as a percentage of `total`, 0 when `total` is 0.
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}
