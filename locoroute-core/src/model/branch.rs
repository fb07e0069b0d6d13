use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// a recurring route shape shared by trips from the same depot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub depot_id: String,
    /// unique stations in canonical order moving away from the depot
    pub core_stations: Vec<String>,
    /// not unique: clusters with the same end stations share an id
    pub branch_id: String,
    /// stop-collapsed paths assigned to this branch, in assignment order
    pub all_paths: Vec<Vec<String>>,
    /// last station of each member path and how often it ended a path
    pub terminals: IndexMap<String, usize>,
    pub length: usize,
}

impl Branch {
    pub fn new(depot_id: &str, core_stations: Vec<String>, all_paths: Vec<Vec<String>>) -> Branch {
        let mut terminals: IndexMap<String, usize> = IndexMap::new();
        for path in all_paths.iter().filter(|p| p.len() > 1) {
            if let Some(last) = path.last() {
                *terminals.entry(last.clone()).or_insert(0) += 1;
            }
        }
        Branch {
            depot_id: depot_id.to_string(),
            branch_id: branch_id(&core_stations),
            length: core_stations.len(),
            core_stations,
            all_paths,
            terminals,
        }
    }

    /// total number of member paths that contributed a terminal.
    pub fn terminal_visits(&self) -> usize {
        self.terminals.values().sum()
    }

    /// the `n` most frequent terminals, most frequent first. equal counts keep
    /// the order in which the terminals were first observed.
    pub fn top_terminals(&self, n: usize) -> Vec<(&String, usize)> {
        self.terminals
            .iter()
            .map(|(station, count)| (station, *count))
            .sorted_by(|a, b| b.1.cmp(&a.1))
            .take(n)
            .collect_vec()
    }
}

/// names a branch after its first and last canonical stations.
pub fn branch_id(core_stations: &[String]) -> String {
    match core_stations {
        [] => String::from("unknown"),
        [only] => only.clone(),
        [first, .., last] => format!("{first}_to_{last}"),
    }
}
