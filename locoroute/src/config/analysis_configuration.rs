use crate::app::AppError;
use locoroute_core::{
    algorithm::{ClusterParameters, MatchParameters},
    lookup::PrefixLabelLookup,
};
use serde::{Deserialize, Serialize};

/// defines behaviors for a route analysis run
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct AnalysisConfiguration {
    pub cluster: ClusterParameters,
    pub matching: MatchParameters,
    /// region names for depots, keyed by depot id prefix
    pub depot_labels: PrefixLabelLookup,
    /// number of most active locomotives listed in the summary report
    pub top_locomotives: usize,
    /// worker threads for the depot analysis. 0 lets rayon decide.
    pub parallelism: usize,
}

impl Default for AnalysisConfiguration {
    fn default() -> Self {
        Self {
            cluster: Default::default(),
            matching: Default::default(),
            depot_labels: Default::default(),
            top_locomotives: 10,
            parallelism: 1,
        }
    }
}

impl TryFrom<&String> for AnalysisConfiguration {
    type Error = AppError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        let decode: fn(&str) -> Result<AnalysisConfiguration, String> = if f.ends_with(".toml") {
            |s| toml::from_str(s).map_err(|e| e.to_string())
        } else if f.ends_with(".json") {
            |s| serde_json::from_str(s).map_err(|e| e.to_string())
        } else {
            return Err(AppError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )));
        };
        let s = std::fs::read_to_string(f)
            .map_err(|e| AppError::ConfigurationError(format!("failure reading {f}: {e}")))?;
        decode(&s).map_err(|e| AppError::ConfigurationError(format!("failure decoding {f}: {e}")))
    }
}
