use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// a single observation of a locomotive passing a station. the ingestion layer
/// produces these already parsed; the analytics never modify them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub series: String,
    pub number: String,
    pub timestamp: NaiveDateTime,
    pub station_id: String,
    pub depot_id: String,
}

impl Record {
    pub fn new(
        series: &str,
        number: &str,
        timestamp: NaiveDateTime,
        station_id: &str,
        depot_id: &str,
    ) -> Record {
        Record {
            series: series.to_string(),
            number: number.to_string(),
            timestamp,
            station_id: station_id.to_string(),
            depot_id: depot_id.to_string(),
        }
    }

    /// key of the locomotive that produced this record.
    pub fn locomotive_key(&self) -> String {
        locomotive_key(&self.series, &self.number)
    }
}

/// identifies a locomotive by its series and number, e.g. `VL80-001`.
pub fn locomotive_key(series: &str, number: &str) -> String {
    format!("{series}-{number}")
}
