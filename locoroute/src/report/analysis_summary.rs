use crate::analysis::DepotAnalysis;
use indexmap::IndexMap;
use itertools::Itertools;
use locoroute_core::model::{percentage, LocomotiveDirectionStats};
use serde::{Deserialize, Serialize};

/// how many locomotives prefer a direction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DirectionPopularity {
    pub direction_id: String,
    pub count: usize,
    /// share of the locomotives the popularity was measured over
    pub percentage: f64,
}

/// direction preferences of the locomotives based at one depot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DepotPopularity {
    pub depot_id: String,
    pub label: String,
    pub locomotives: usize,
    pub trips: usize,
    /// percentages relative to all locomotives of the depot
    pub directions: Vec<DirectionPopularity>,
}

/// fleet-wide direction preferences over every profiled locomotive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub total_locomotives: usize,
    pub locomotives_with_favorite: usize,
    pub locomotives_with_favorite_percent: f64,
    /// locomotives whose matched trips all went one way
    pub locomotives_single_direction: usize,
    pub locomotives_single_direction_percent: f64,
    /// percentages relative to locomotives with a favorite direction
    pub direction_popularity: Vec<DirectionPopularity>,
    /// one entry per depot, in depot order
    pub depot_popularity: Vec<DepotPopularity>,
    /// keys of the locomotives with the most trips
    pub top_locomotives: Vec<String>,
}

impl AnalysisSummary {
    pub fn new(analyses: &[DepotAnalysis], top_locomotives: Vec<String>) -> AnalysisSummary {
        let profiles = analyses.iter().flat_map(|a| a.profiles.iter()).collect_vec();
        let total = profiles.len();
        let with_favorite = profiles.iter().filter(|p| p.has_favorite()).count();
        let single_direction = profiles
            .iter()
            .filter(|p| p.visits_by_direction.len() == 1)
            .count();

        let depot_popularity = analyses
            .iter()
            .map(|a| DepotPopularity {
                depot_id: a.depot_id.clone(),
                label: a.label.clone(),
                locomotives: a.profiles.len(),
                trips: a.total_trips(),
                directions: direction_popularity(a.profiles.iter(), a.profiles.len()),
            })
            .collect_vec();

        AnalysisSummary {
            total_locomotives: total,
            locomotives_with_favorite: with_favorite,
            locomotives_with_favorite_percent: percentage(with_favorite, total),
            locomotives_single_direction: single_direction,
            locomotives_single_direction_percent: percentage(single_direction, total),
            direction_popularity: direction_popularity(profiles.into_iter(), with_favorite),
            depot_popularity,
            top_locomotives,
        }
    }
}

/// counts favorite directions, most preferred first, equal counts by
/// direction id. percentages are taken over `denominator` locomotives.
fn direction_popularity<'a>(
    profiles: impl Iterator<Item = &'a LocomotiveDirectionStats>,
    denominator: usize,
) -> Vec<DirectionPopularity> {
    let mut favorites: IndexMap<&str, usize> = IndexMap::new();
    for profile in profiles.filter(|p| p.has_favorite()) {
        *favorites
            .entry(profile.most_popular_direction_id.as_str())
            .or_insert(0) += 1;
    }
    favorites
        .into_iter()
        .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)))
        .map(|(id, count)| DirectionPopularity {
            direction_id: id.to_string(),
            count,
            percentage: percentage(count, denominator),
        })
        .collect_vec()
}
