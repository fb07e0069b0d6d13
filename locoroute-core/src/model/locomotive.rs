use super::{locomotive_key, Record, RouteError, Trip};
use crate::algorithm::segment_trips;
use serde::{Deserialize, Serialize};

/// a locomotive, its home depot and its visit history.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Locomotive {
    pub key: String,
    pub series: String,
    pub number: String,
    pub depot_id: String,
    /// visit records in ascending time order
    pub records: Vec<Record>,
    pub trips: Vec<Trip>,
}

impl Locomotive {
    /// builds a locomotive from records in any order. records are stably
    /// sorted by timestamp so same-time readings keep their input order.
    pub fn new(series: &str, number: &str, depot_id: &str, mut records: Vec<Record>) -> Locomotive {
        records.sort_by_key(|r| r.timestamp);
        Locomotive {
            key: locomotive_key(series, number),
            series: series.to_string(),
            number: number.to_string(),
            depot_id: depot_id.to_string(),
            records,
            trips: vec![],
        }
    }

    /// builds a locomotive from records the caller guarantees are already in
    /// time order.
    ///
    /// # Errors
    ///
    /// [`RouteError::InvalidInput`] if any record is earlier than its predecessor.
    pub fn from_ordered_records(
        series: &str,
        number: &str,
        depot_id: &str,
        records: Vec<Record>,
    ) -> Result<Locomotive, RouteError> {
        if let Some(idx) = records
            .windows(2)
            .position(|pair| pair[1].timestamp < pair[0].timestamp)
        {
            return Err(RouteError::InvalidInput(format!(
                "records for locomotive {} are not time-ordered at index {}: {} precedes {}",
                locomotive_key(series, number),
                idx + 1,
                records[idx].timestamp,
                records[idx + 1].timestamp
            )));
        }
        Ok(Locomotive {
            key: locomotive_key(series, number),
            series: series.to_string(),
            number: number.to_string(),
            depot_id: depot_id.to_string(),
            records,
            trips: vec![],
        })
    }

    /// a locomotive known only by its already-segmented trips.
    pub fn from_trips(series: &str, number: &str, depot_id: &str, trips: Vec<Trip>) -> Locomotive {
        Locomotive {
            key: locomotive_key(series, number),
            series: series.to_string(),
            number: number.to_string(),
            depot_id: depot_id.to_string(),
            records: vec![],
            trips,
        }
    }

    /// splits the visit history into trips, replacing any previous result.
    pub fn segment(&mut self) {
        self.trips = segment_trips(&self.records, &self.depot_id);
    }
}
