use crate::algorithm::core_path;

/// a group of stop-collapsed paths believed to travel the same branch. new
/// paths are compared only against the core of the path that opened the
/// cluster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathCluster {
    representative_core: Vec<String>,
    paths: Vec<Vec<String>>,
}

impl PathCluster {
    pub fn new(path: Vec<String>, depot_id: &str) -> PathCluster {
        PathCluster {
            representative_core: core_path(&path, depot_id),
            paths: vec![path],
        }
    }

    /// core path of the first member.
    pub fn representative_core(&self) -> &[String] {
        &self.representative_core
    }

    pub fn paths(&self) -> &[Vec<String>] {
        &self.paths
    }

    pub fn push(&mut self, path: Vec<String>) {
        self.paths.push(path);
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn into_paths(self) -> Vec<Vec<String>> {
        self.paths
    }
}
