use super::{RouteError, Trip};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// a named route from a depot to one terminal station, aggregated from every
/// trip that left the depot and ended there.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Direction {
    pub id: String,
    pub depot_id: String,
    pub terminal_station_id: String,
    /// stop-collapsed route of the first trip observed to this terminal
    pub route_stations: Vec<String>,
    pub frequency: usize,
    pub locomotive_keys: IndexSet<String>,
}

impl Direction {
    /// starts a direction from the first trip seen reaching its terminal.
    ///
    /// # Errors
    ///
    /// [`RouteError::InvalidInput`] if the trip route has fewer than two
    /// stations or does not begin at `depot_id`.
    pub fn from_trip(depot_id: &str, trip: &Trip, owner: &str) -> Result<Direction, RouteError> {
        if trip.route.len() < 2 {
            return Err(RouteError::InvalidInput(format!(
                "direction requires a route of at least 2 stations, trip of {owner} has {}",
                trip.route.len()
            )));
        }
        if !trip.starts_at(depot_id) {
            return Err(RouteError::InvalidInput(format!(
                "trip of {owner} does not start at depot {depot_id}"
            )));
        }
        let terminal = trip.route[trip.route.len() - 1].clone();
        Ok(Direction {
            id: direction_id(depot_id, &terminal),
            depot_id: depot_id.to_string(),
            terminal_station_id: terminal,
            route_stations: trip.route.clone(),
            frequency: 1,
            locomotive_keys: IndexSet::from([owner.to_string()]),
        })
    }

    /// counts one more trip by `owner` to this terminal.
    pub fn observe(&mut self, owner: &str) {
        self.frequency += 1;
        self.locomotive_keys.insert(owner.to_string());
    }
}

pub fn direction_id(depot_id: &str, terminal_station_id: &str) -> String {
    format!("{depot_id}_dir_{terminal_station_id}")
}
