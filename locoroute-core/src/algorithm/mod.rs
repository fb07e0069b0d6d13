pub mod clustering;
mod direction_ops;
mod match_parameters;
mod path_ops;
mod profile_ops;
mod segmentation;
mod station_ops;

pub use clustering::{cluster_branches, ClusterParameters};
pub use direction_ops::build_directions;
pub use match_parameters::MatchParameters;
pub use path_ops::{collapse_stops, core_path};
pub use profile_ops::{jaccard_similarity, match_direction, profile_locomotive};
pub use segmentation::segment_trips;
pub use station_ops::{station_stats, top_locomotives};
