use log::trace;

use crate::clusterer::{ClusterDistance, ClusterSet, Linkage};

/// Finds the globally closest pair of clusters under a distance strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct NeighborFinder<D = Linkage> {
    metric: D,
}

impl<D: ClusterDistance> NeighborFinder<D> {
    pub fn new(metric: D) -> Self {
        Self { metric }
    }

    /// Return the indices `(i, j)`, `i < j`, of the two closest clusters.
    ///
    /// Pairs are scanned row-major and a later pair only wins on a strictly
    /// smaller distance, so the first of several equally close pairs is kept.
    /// A single-cluster set yields `(0, 0)` without computing any distance.
    pub fn find(&self, clusters: &ClusterSet) -> (usize, usize) {
        self.find_with_distance(clusters)
            .map(|(i, j, _)| (i, j))
            .unwrap_or((0, 0))
    }

    /// Like [`NeighborFinder::find`], but also returns the winning distance.
    ///
    /// Returns `None` when the set holds fewer than two clusters.
    pub fn find_with_distance(&self, clusters: &ClusterSet) -> Option<(usize, usize, f32)> {
        debug_assert!(!clusters.is_empty());

        let n = clusters.len();
        let mut best: Option<(usize, usize, f32)> = None;

        for i in 0..n {
            for j in (i + 1)..n {
                let d = self.metric.distance(&clusters[i], &clusters[j]);
                trace!("distance({}, {}) = {}", i, j, d);

                let closer = match best {
                    None => true,
                    Some((_, _, best_d)) => d < best_d,
                };

                if closer {
                    best = Some((i, j, d));
                }
            }
        }

        best
    }
}
