use super::{AppError, Operation};
use crate::{config::AnalysisConfiguration, ingest};
use clap::Parser;
use locoroute_core::model::Locomotive;
use std::path::Path;

/// route analytics over locomotive station-visit logs
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct LocorouteApp {
    #[command(subcommand)]
    pub op: Operation,
    /// station-visit log, CSV with header `series,number,timestamp,station,depot`
    #[arg(long)]
    pub input: String,
    /// .toml or .json file with analysis parameters
    #[arg(long)]
    pub configuration_file: Option<String>,
    /// only analyze locomotives based at this depot
    #[arg(long)]
    pub depot: Option<String>,
    /// report destination. writes JSON to stdout when omitted, CSV for flat
    /// reports when the name ends in .csv
    #[arg(long)]
    pub output_file: Option<String>,
    /// worker threads, overrides the configuration file
    #[arg(long)]
    pub parallelism: Option<usize>,
}

impl LocorouteApp {
    pub fn run(&self) -> Result<(), AppError> {
        let mut conf = match &self.configuration_file {
            None => Ok(AnalysisConfiguration::default()),
            Some(f) => {
                log::info!("reading locoroute configuration from {f}");
                AnalysisConfiguration::try_from(f)
            }
        }?;
        if let Some(parallelism) = self.parallelism {
            conf.parallelism = parallelism;
        }

        let locomotives = self.load_locomotives()?;
        self.op
            .run(&locomotives, &conf, self.output_file.as_deref())
    }

    /// reads the input log into segmented locomotives, keeping only the
    /// requested depot if one was given.
    fn load_locomotives(&self) -> Result<Vec<Locomotive>, AppError> {
        let record_set = ingest::read_records(Path::new(&self.input))?;
        if record_set.skipped_rows > 0 {
            log::warn!(
                "{} rows of {} could not be read",
                record_set.skipped_rows,
                self.input
            );
        }
        let locomotives = ingest::group_locomotives(record_set.records);
        let selected = match &self.depot {
            None => locomotives,
            Some(depot) => locomotives
                .into_iter()
                .filter(|l| &l.depot_id == depot)
                .collect(),
        };
        log::info!("loaded {} locomotives", selected.len());
        Ok(selected)
    }
}
