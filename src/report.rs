use serde::Serialize;

use crate::clusterer::{AgglomerationResult, ClusterSet, Linkage};

/// Final partition of a run, ready for printing
#[derive(Debug, Serialize)]
pub struct PartitionReport<'a> {
    pub linkage: Linkage,
    pub target: usize,
    pub merges: usize,
    pub clusters: &'a ClusterSet,
}

impl<'a> PartitionReport<'a> {
    pub fn new(result: &'a AgglomerationResult, linkage: Linkage, target: usize) -> Self {
        Self {
            linkage,
            target,
            merges: result.merges,
            clusters: &result.clusters,
        }
    }

    /// One line per cluster, points as `id[x,y]` in ascending id order
    pub fn to_text(&self) -> String {
        self.clusters.to_string()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
