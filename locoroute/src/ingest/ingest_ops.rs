use super::RecordRow;
use crate::app::AppError;
use indexmap::IndexMap;
use itertools::Itertools;
use locoroute_core::model::{Locomotive, Record};
use std::io::Read;
use std::path::Path;

/// records read from a station-visit log along with the number of rows that
/// could not be used.
#[derive(Clone, Debug, Default)]
pub struct RecordSet {
    pub records: Vec<Record>,
    pub skipped_rows: usize,
}

/// reads a station-visit CSV file. the first row is a header.
pub fn read_records(path: &Path) -> Result<RecordSet, AppError> {
    let file = std::fs::File::open(path).map_err(|e| {
        AppError::InputError(format!("failure opening {}: {e}", path.to_string_lossy()))
    })?;
    let result = read_records_from(file)?;
    log::info!(
        "read {} records from {}, skipped {} rows",
        result.records.len(),
        path.to_string_lossy(),
        result.skipped_rows
    );
    Ok(result)
}

/// reads station-visit rows from any CSV source. rows with fewer than five
/// fields or an unrecognized timestamp are logged and skipped.
pub fn read_records_from<R: Read>(source: R) -> Result<RecordSet, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let mut result = RecordSet::default();
    for (idx, row) in reader.records().enumerate() {
        // header is line 1
        let line = idx + 2;
        let parsed = row
            .map_err(|e| e.to_string())
            .and_then(|r| RecordRow::try_from(&r))
            .and_then(Record::try_from);
        match parsed {
            Ok(record) => result.records.push(record),
            Err(e) => {
                log::warn!("skipping row {line}: {e}");
                result.skipped_rows += 1;
            }
        }
    }
    Ok(result)
}

/// groups records into locomotives and splits each into trips.
///
/// a locomotive's depot is taken from its first record in input order. its
/// records are sorted by time before segmentation. locomotives are returned
/// ordered by key.
pub fn group_locomotives(records: Vec<Record>) -> Vec<Locomotive> {
    let mut grouped: IndexMap<String, Vec<Record>> = IndexMap::new();
    for record in records.into_iter() {
        grouped
            .entry(record.locomotive_key())
            .or_default()
            .push(record);
    }

    grouped
        .into_iter()
        .sorted_by(|a, b| a.0.cmp(&b.0))
        .filter_map(|(_, records)| {
            let first = records.first()?;
            let (series, number, depot) =
                (first.series.clone(), first.number.clone(), first.depot_id.clone());
            let mut locomotive = Locomotive::new(&series, &number, &depot, records);
            locomotive.segment();
            Some(locomotive)
        })
        .collect_vec()
}
