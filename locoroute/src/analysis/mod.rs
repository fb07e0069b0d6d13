pub mod analysis_ops;
mod depot_analysis;

pub use analysis_ops::{analyze_depot, run_analysis};
pub use depot_analysis::DepotAnalysis;
