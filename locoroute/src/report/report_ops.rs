use super::{AnalysisSummary, ProfileRow, StationRow};
use crate::{analysis::DepotAnalysis, app::AppError};
use itertools::Itertools;
use locoroute_core::{
    algorithm::top_locomotives,
    model::{Locomotive, StationStats},
};
use serde::Serialize;
use std::{fs::File, io::Write, path::Path};

/// summarizes direction preferences over every depot of an analysis run.
pub fn summarize(
    analyses: &[DepotAnalysis],
    locomotives: &[Locomotive],
    top_n: usize,
) -> AnalysisSummary {
    AnalysisSummary::new(analyses, top_locomotives(locomotives, top_n))
}

/// true when `output_file` asks for CSV output.
pub fn is_csv(output_file: Option<&str>) -> bool {
    output_file.is_some_and(|f| f.ends_with(".csv"))
}

/// writes `value` as pretty JSON to `output_file`, or to stdout when no file
/// is given.
pub fn write_json<T: Serialize + ?Sized>(value: &T, output_file: Option<&str>) -> Result<(), AppError> {
    let encoded = serde_json::to_string_pretty(value)?;
    match output_file {
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{encoded}")?;
        }
        Some(f) => {
            let mut file = File::create(f)?;
            writeln!(file, "{encoded}")?;
            log::info!("wrote {f}");
        }
    }
    Ok(())
}

/// writes `rows` to a CSV file with a header row.
pub fn write_csv<T: Serialize>(rows: &[T], output_file: &Path) -> Result<(), AppError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_path(output_file)?;
    for row in rows.iter() {
        writer.serialize(row)?;
    }
    writer.flush()?;
    log::info!(
        "wrote {} rows to {}",
        rows.len(),
        output_file.to_string_lossy()
    );
    Ok(())
}

pub fn profile_rows(analyses: &[DepotAnalysis]) -> Vec<ProfileRow> {
    analyses
        .iter()
        .flat_map(|a| a.profiles.iter().map(ProfileRow::from))
        .collect_vec()
}

pub fn station_rows(stats: &[StationStats]) -> Vec<StationRow> {
    stats.iter().map(StationRow::from).collect_vec()
}
