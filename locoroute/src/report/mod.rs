mod analysis_summary;
pub mod report_ops;
mod report_rows;

pub use analysis_summary::{AnalysisSummary, DepotPopularity, DirectionPopularity};
pub use report_rows::{BranchRow, LocomotiveTrips, ProfileRow, StationRow, TerminalCount};
