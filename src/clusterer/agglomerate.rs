use log::{debug, info};

use crate::clusterer::{
    ClusterDistance, ClusterError, ClusterSet, Linkage, NeighborFinder, DEFAULT_TARGET,
};

/// Final partition and how many merges produced it
#[derive(Debug, Clone)]
pub struct AgglomerationResult {
    pub clusters: ClusterSet,
    pub merges: usize,
}

/// Repeatedly merges the two closest clusters until `target` remain
#[derive(Debug, Clone)]
pub struct Agglomerator<D = Linkage> {
    finder: NeighborFinder<D>,
    target: usize,
}

impl<D: ClusterDistance> Agglomerator<D> {
    /// Create an agglomerator that reduces down to [`DEFAULT_TARGET`] clusters
    pub fn new(metric: D) -> Self {
        Self {
            finder: NeighborFinder::new(metric),
            target: DEFAULT_TARGET,
        }
    }

    /// Set the number of clusters to stop at
    pub fn target(mut self, target: usize) -> Self {
        self.target = target;
        self
    }

    pub fn target_count(&self) -> usize {
        self.target
    }

    /// Merge clusters until exactly `target` remain.
    ///
    /// The target is checked before any work is done. Any allocation failure
    /// while merging aborts the run; the partially merged set is dropped.
    pub fn run(&self, mut clusters: ClusterSet) -> Result<AgglomerationResult, ClusterError> {
        let count = clusters.len();
        if self.target == 0 || self.target > count {
            return Err(ClusterError::InvalidTarget {
                target: self.target,
                count,
            });
        }

        let mut merges = 0;

        while clusters.len() > self.target {
            // Only `None` when a single cluster is left, which the loop bound rules out
            let Some((i, j, distance)) = self.finder.find_with_distance(&clusters) else {
                break;
            };

            clusters.merge(i, j)?;
            clusters.remove_at(j);
            merges += 1;

            debug!(
                "merged cluster {} into {} at distance {} ({} points, {} clusters left)",
                j,
                i,
                distance,
                clusters[i].len(),
                clusters.len()
            );
        }

        info!(
            "agglomeration finished: {} merges, {} clusters",
            merges,
            clusters.len()
        );

        Ok(AgglomerationResult { clusters, merges })
    }
}

/// Reduce `clusters` to `target` groups using `linkage`
pub fn agglomerate(
    clusters: ClusterSet,
    target: usize,
    linkage: Linkage,
) -> Result<AgglomerationResult, ClusterError> {
    Agglomerator::new(linkage).target(target).run(clusters)
}
