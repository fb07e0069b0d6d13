use super::LabelLookup;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// labels identifiers by their leading characters, e.g. a region name for
/// every depot whose id starts with `94`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrefixLabelLookup {
    pub prefix_length: usize,
    pub labels: HashMap<String, String>,
    /// returned when no prefix matches
    pub fallback: String,
}

impl Default for PrefixLabelLookup {
    fn default() -> Self {
        Self {
            prefix_length: 2,
            labels: HashMap::new(),
            fallback: String::from("unknown"),
        }
    }
}

impl PrefixLabelLookup {
    pub fn new(prefix_length: usize, labels: HashMap<String, String>, fallback: &str) -> Self {
        Self {
            prefix_length,
            labels,
            fallback: fallback.to_string(),
        }
    }

    /// leading `prefix_length` characters of `id`, or all of it when shorter.
    pub fn prefix<'a>(&self, id: &'a str) -> &'a str {
        match id.char_indices().nth(self.prefix_length) {
            Some((end, _)) => &id[..end],
            None => id,
        }
    }
}

impl LabelLookup for PrefixLabelLookup {
    fn label(&self, id: &str) -> String {
        self.labels
            .get(self.prefix(id))
            .cloned()
            .unwrap_or_else(|| self.fallback.clone())
    }
}
