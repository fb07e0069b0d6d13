use super::DepotAnalysis;
use crate::{app::AppError, config::AnalysisConfiguration};
use indexmap::IndexMap;
use itertools::Itertools;
use kdam::{Bar, BarExt};
use locoroute_core::{
    algorithm::{build_directions, cluster_branches, profile_locomotive},
    lookup::LabelLookup,
    model::{Locomotive, Trip},
};
use rayon::prelude::*;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};

/// analyzes every depot found among `locomotives`.
///
/// depots are processed in parallel on a pool of `conf.parallelism` threads,
/// each owning the locomotives based there. `cancel` is checked before each
/// depot starts; once it is set the run stops with [`AppError::Cancelled`].
/// results are ordered by depot id regardless of completion order.
pub fn run_analysis(
    locomotives: &[Locomotive],
    conf: &AnalysisConfiguration,
    cancel: &AtomicBool,
) -> Result<Vec<DepotAnalysis>, AppError> {
    let mut by_depot: IndexMap<&str, Vec<&Locomotive>> = IndexMap::new();
    for locomotive in locomotives.iter().sorted_by(|a, b| a.key.cmp(&b.key)) {
        by_depot
            .entry(locomotive.depot_id.as_str())
            .or_default()
            .push(locomotive);
    }
    log::info!(
        "analyzing {} locomotives across {} depots",
        locomotives.len(),
        by_depot.len()
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(conf.parallelism)
        .build()?;
    let bar = Arc::new(Mutex::new(
        Bar::builder()
            .desc("analyze depots")
            .total(by_depot.len())
            .build()
            .map_err(AppError::ProgressError)?,
    ));

    let depots = by_depot.into_iter().collect_vec();
    let result = pool.install(|| {
        depots
            .into_par_iter()
            .map(|(depot_id, depot_locomotives)| {
                if cancel.load(Ordering::Relaxed) {
                    return Err(AppError::Cancelled);
                }
                let analysis = analyze_depot(depot_id, &depot_locomotives, conf);
                if let Ok(mut bar) = bar.clone().lock() {
                    let _ = bar.update(1);
                }
                Ok(analysis)
            })
            .collect::<Result<Vec<_>, AppError>>()
    });
    eprintln!();

    let analyses = result?
        .into_iter()
        .sorted_by(|a, b| a.depot_id.cmp(&b.depot_id))
        .collect_vec();
    log::info!("finished analysis of {} depots", analyses.len());
    Ok(analyses)
}

/// discovers branches and directions of one depot and profiles each of its
/// locomotives against those directions. locomotives are scanned in the
/// order given.
pub fn analyze_depot(
    depot_id: &str,
    locomotives: &[&Locomotive],
    conf: &AnalysisConfiguration,
) -> DepotAnalysis {
    let trips_by_locomotive: IndexMap<&str, &[Trip]> = locomotives
        .iter()
        .map(|l| (l.key.as_str(), l.trips.as_slice()))
        .collect();
    let branches = cluster_branches(depot_id, &trips_by_locomotive, &conf.cluster);
    let directions = build_directions(depot_id, &trips_by_locomotive);
    let profiles = locomotives
        .iter()
        .map(|l| profile_locomotive(l, &directions, &conf.matching))
        .sorted_by(|a, b| a.locomotive_key.cmp(&b.locomotive_key))
        .collect_vec();
    log::debug!(
        "depot {depot_id}: {} branches, {} directions, {} locomotives",
        branches.len(),
        directions.len(),
        profiles.len()
    );

    DepotAnalysis {
        depot_id: depot_id.to_string(),
        label: conf.depot_labels.label(depot_id),
        branches,
        directions,
        profiles,
    }
}
