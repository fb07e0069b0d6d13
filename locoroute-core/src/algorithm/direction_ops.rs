use crate::model::{Direction, Trip};
use indexmap::IndexMap;
use itertools::Itertools;

/// builds one direction per terminal station reached by trips that leave
/// `depot_id`.
///
/// only trips whose stop-collapsed route has at least two stations and begins
/// at the depot contribute. the first such trip to a terminal fixes the
/// direction's route. results are sorted by frequency, most frequent first;
/// equal frequencies keep first-seen order.
pub fn build_directions(depot_id: &str, trips_by_locomotive: &IndexMap<&str, &[Trip]>) -> Vec<Direction> {
    let mut directions: IndexMap<String, Direction> = IndexMap::new();
    let mut ignored = 0;
    for (owner, trips) in trips_by_locomotive.iter() {
        for trip in trips.iter() {
            let terminal = match trip.terminal() {
                Some(t) if trip.route.len() >= 2 && trip.starts_at(depot_id) => t,
                _ => {
                    ignored += 1;
                    continue;
                }
            };
            match directions.get_mut(terminal) {
                Some(direction) => direction.observe(owner),
                None => match Direction::from_trip(depot_id, trip, owner) {
                    Ok(direction) => {
                        directions.insert(terminal.clone(), direction);
                    }
                    Err(e) => log::debug!("depot {depot_id}: {e}"),
                },
            }
        }
    }
    if ignored > 0 {
        log::debug!("depot {depot_id}: {ignored} trips do not leave the depot and form no direction");
    }

    directions
        .into_values()
        .sorted_by(|a, b| b.frequency.cmp(&a.frequency))
        .collect_vec()
}
