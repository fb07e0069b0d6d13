use chrono::NaiveDateTime;
use csv::StringRecord;
use locoroute_core::model::Record;

const TIMESTAMP_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];

/// one row of a station-visit log: `series,number,timestamp,station,depot`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordRow {
    pub series: String,
    pub number: String,
    pub timestamp: String,
    pub station: String,
    pub depot: String,
}

impl TryFrom<&StringRecord> for RecordRow {
    type Error = String;

    fn try_from(row: &StringRecord) -> Result<Self, Self::Error> {
        match (row.get(0), row.get(1), row.get(2), row.get(3), row.get(4)) {
            (Some(series), Some(number), Some(timestamp), Some(station), Some(depot)) => {
                Ok(RecordRow {
                    series: series.trim().to_string(),
                    number: number.trim().to_string(),
                    timestamp: timestamp.trim().to_string(),
                    station: station.trim().to_string(),
                    depot: depot.trim().to_string(),
                })
            }
            _ => Err(format!("expected 5 fields, found {}", row.len())),
        }
    }
}

impl TryFrom<RecordRow> for Record {
    type Error = String;

    fn try_from(row: RecordRow) -> Result<Self, Self::Error> {
        let timestamp = parse_timestamp(&row.timestamp)
            .ok_or_else(|| format!("unrecognized timestamp '{}'", row.timestamp))?;
        Ok(Record {
            series: row.series,
            number: row.number,
            timestamp,
            station_id: row.station,
            depot_id: row.depot,
        })
    }
}

/// parses the timestamp layouts found in station-visit logs, ISO 8601 with or
/// without fractional seconds and the space-separated variant.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}
