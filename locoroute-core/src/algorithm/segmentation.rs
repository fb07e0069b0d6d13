use crate::model::{Record, Trip};

/// splits one locomotive's time-ordered records into trips.
///
/// every record's station is appended to the open trip. a record at
/// `depot_id` closes the trip as complete, and the next record (if any) opens
/// a new one. a trailing open trip is always kept, marked incomplete. the
/// concatenated raw stations of the result reproduce the input sequence.
pub fn segment_trips(records: &[Record], depot_id: &str) -> Vec<Trip> {
    let mut trips: Vec<Trip> = vec![];
    let first = match records.first() {
        None => return trips,
        Some(r) => r,
    };

    let mut start_time = first.timestamp;
    let mut stations: Vec<String> = vec![];
    for (idx, record) in records.iter().enumerate() {
        stations.push(record.station_id.clone());
        if record.station_id == depot_id {
            let closed = std::mem::take(&mut stations);
            trips.push(Trip::new_complete(start_time, record.timestamp, closed));
            if let Some(next) = records.get(idx + 1) {
                start_time = next.timestamp;
            }
        }
    }

    if !stations.is_empty() {
        trips.push(Trip::new_incomplete(start_time, stations));
    }

    trips
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use proptest::prelude::*;

    fn base() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 15)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn records(stations: &[&str]) -> Vec<Record> {
        stations
            .iter()
            .enumerate()
            .map(|(i, s)| Record::new("VL80", "001", base() + Duration::minutes(i as i64), s, "9400"))
            .collect()
    }

    #[test]
    fn test_leading_depot_reading_is_its_own_trip() {
        let input = records(&["9400", "9401", "9402", "9400", "9403", "9400"]);
        let trips = segment_trips(&input, "9400");
        assert_eq!(trips.len(), 3);
        assert_eq!(trips[0].stations, vec!["9400"]);
        assert_eq!(trips[1].stations, vec!["9401", "9402", "9400"]);
        assert_eq!(trips[2].stations, vec!["9403", "9400"]);
        assert!(trips.iter().all(|t| t.complete));
        assert_eq!(trips[2].start_time, base() + Duration::minutes(4));
        assert_eq!(trips[2].end_time, Some(base() + Duration::minutes(5)));
    }

    #[test]
    fn test_trips_close_on_return_to_depot() {
        let input = records(&["9401", "9402", "9400", "9403", "9400"]);
        let trips = segment_trips(&input, "9400");
        assert_eq!(trips.len(), 2);
        assert_eq!(trips[0].stations, vec!["9401", "9402", "9400"]);
        assert_eq!(trips[1].stations, vec!["9403", "9400"]);
        assert!(trips.iter().all(|t| t.complete));
    }

    #[test]
    fn test_trailing_trip_is_incomplete() {
        let input = records(&["9401", "9400", "9402", "9402", "9403"]);
        let trips = segment_trips(&input, "9400");
        assert_eq!(trips.len(), 2);
        let last = &trips[1];
        assert!(!last.complete);
        assert_eq!(last.end_time, None);
        assert_eq!(last.stations, vec!["9402", "9402", "9403"]);
        assert_eq!(last.route, vec!["9402", "9403"]);
    }

    #[test]
    fn test_empty_records() {
        assert!(segment_trips(&[], "9400").is_empty());
    }

    #[test]
    fn test_single_depot_record() {
        let trips = segment_trips(&records(&["9400"]), "9400");
        assert_eq!(trips.len(), 1);
        assert!(trips[0].complete);
        assert_eq!(trips[0].stations, vec!["9400"]);
        assert_eq!(trips[0].start_time, trips[0].end_time.unwrap());
    }

    proptest! {
        #[test]
        fn prop_segmentation_partitions_records(
            stations in prop::collection::vec(prop::sample::select(vec!["9400", "9401", "9402"]), 0..40)
        ) {
            let input = records(&stations);
            let trips = segment_trips(&input, "9400");
            let rejoined: Vec<String> = trips.iter().flat_map(|t| t.stations.clone()).collect();
            let expected: Vec<String> = stations.iter().map(|s| s.to_string()).collect();
            prop_assert_eq!(rejoined, expected);

            let depot_visits = stations.iter().filter(|s| **s == "9400").count();
            let trailing = usize::from(stations.last().map(|s| *s != "9400").unwrap_or(false));
            prop_assert_eq!(trips.len(), depot_visits + trailing);
            prop_assert!(trips.iter().all(|t| !t.stations.is_empty()));
        }
    }
}
