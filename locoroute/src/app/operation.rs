use super::AppError;
use crate::{
    analysis::{run_analysis, DepotAnalysis},
    config::AnalysisConfiguration,
    report::{report_ops, BranchRow, LocomotiveTrips},
};
use clap::Subcommand;
use indexmap::IndexMap;
use itertools::Itertools;
use locoroute_core::{
    algorithm::station_stats,
    model::{Direction, Locomotive, LocomotiveDirectionStats},
};
use std::{collections::HashSet, path::Path, sync::atomic::AtomicBool};

#[derive(Debug, Clone, Subcommand)]
pub enum Operation {
    /// split each locomotive's visits into trips between depot visits
    Trips,
    /// cluster trip paths into recurring branches per depot
    Branches,
    /// list the directions leaving each depot
    Directions,
    /// favorite direction of every locomotive
    Profiles,
    /// visit statistics per station
    Stations {
        /// file with one known station id per line. other stations are ignored
        #[arg(long)]
        station_file: Option<String>,
    },
    /// fleet-wide direction preferences
    Summary,
}

impl Operation {
    pub fn run(
        &self,
        locomotives: &[Locomotive],
        conf: &AnalysisConfiguration,
        output_file: Option<&str>,
    ) -> Result<(), AppError> {
        let cancel = AtomicBool::new(false);
        match self {
            Operation::Trips => {
                let trips = locomotives.iter().map(LocomotiveTrips::from).collect_vec();
                report_ops::write_json(&trips, output_file)
            }
            Operation::Branches => {
                let analyses = run_analysis(locomotives, conf, &cancel)?;
                let branches: IndexMap<&str, Vec<BranchRow>> = analyses
                    .iter()
                    .map(|a| {
                        let rows = a.branches.iter().map(BranchRow::from).collect_vec();
                        (a.depot_id.as_str(), rows)
                    })
                    .collect();
                report_ops::write_json(&branches, output_file)
            }
            Operation::Directions => {
                let analyses = run_analysis(locomotives, conf, &cancel)?;
                let directions: IndexMap<&str, &[Direction]> = analyses
                    .iter()
                    .map(|a| (a.depot_id.as_str(), a.directions.as_slice()))
                    .collect();
                report_ops::write_json(&directions, output_file)
            }
            Operation::Profiles => {
                let analyses = run_analysis(locomotives, conf, &cancel)?;
                write_profiles(&analyses, output_file)
            }
            Operation::Stations { station_file } => {
                let known = match station_file {
                    None => None,
                    Some(f) => Some(read_station_file(f)?),
                };
                let stats = station_stats(locomotives, known.as_ref());
                match output_file {
                    Some(f) if report_ops::is_csv(output_file) => {
                        report_ops::write_csv(&report_ops::station_rows(&stats), Path::new(f))
                    }
                    _ => report_ops::write_json(&stats, output_file),
                }
            }
            Operation::Summary => {
                let analyses = run_analysis(locomotives, conf, &cancel)?;
                let summary =
                    report_ops::summarize(&analyses, locomotives, conf.top_locomotives);
                report_ops::write_json(&summary, output_file)
            }
        }
    }
}

fn write_profiles(analyses: &[DepotAnalysis], output_file: Option<&str>) -> Result<(), AppError> {
    match output_file {
        Some(f) if report_ops::is_csv(output_file) => {
            report_ops::write_csv(&report_ops::profile_rows(analyses), Path::new(f))
        }
        _ => {
            let profiles: Vec<&LocomotiveDirectionStats> =
                analyses.iter().flat_map(|a| a.profiles.iter()).collect();
            report_ops::write_json(&profiles, output_file)
        }
    }
}

fn read_station_file(f: &str) -> Result<HashSet<String>, AppError> {
    let contents = std::fs::read_to_string(f)
        .map_err(|e| AppError::InputError(format!("failure reading {f}: {e}")))?;
    let stations: HashSet<String> = contents
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect();
    log::info!("read {} known stations from {f}", stations.len());
    Ok(stations)
}
