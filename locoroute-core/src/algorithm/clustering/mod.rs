mod branch_ops;
mod cluster_parameters;
mod path_cluster;
mod similarity;

pub use branch_ops::{canonical_order, cluster_branches, cluster_paths};
pub use cluster_parameters::ClusterParameters;
pub use path_cluster::PathCluster;
pub use similarity::is_similar_core;
