use std::fmt;

use serde::{Serialize, Serializer};

use crate::clusterer::{Cluster, ClusterError};

/// Dense, index-addressable collection of clusters.
///
/// Removal shifts later clusters left rather than swapping, so indices keep
/// their relative order. Nearest-pair tie-breaking depends on that order.
#[derive(Debug, Clone, Default)]
pub struct ClusterSet {
    clusters: Vec<Cluster>,
}

impl ClusterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty set with room for `capacity` clusters
    pub fn with_capacity(capacity: usize) -> Result<Self, ClusterError> {
        let mut clusters = Vec::new();
        clusters
            .try_reserve_exact(capacity)
            .map_err(|_| ClusterError::Allocation {
                requested: capacity,
            })?;

        Ok(Self { clusters })
    }

    /// Add a cluster at the end of the set
    pub fn push(&mut self, cluster: Cluster) -> Result<(), ClusterError> {
        self.clusters
            .try_reserve(1)
            .map_err(|_| ClusterError::Allocation {
                requested: self.clusters.len() + 1,
            })?;

        self.clusters.push(cluster);
        Ok(())
    }

    /// Append every point of cluster `j` onto cluster `i` and sort `i` by id.
    ///
    /// Cluster `j` is left as it was; remove it afterwards with
    /// [`ClusterSet::remove_at`].
    ///
    /// # Panics
    /// If `i == j` or either index is out of range.
    pub fn merge(&mut self, i: usize, j: usize) -> Result<(), ClusterError> {
        assert_ne!(i, j, "cannot merge a cluster into itself");

        let (recipient, donor) = if i < j {
            let (head, tail) = self.clusters.split_at_mut(j);
            (&mut head[i], &tail[0])
        } else {
            let (head, tail) = self.clusters.split_at_mut(i);
            (&mut tail[0], &head[j])
        };

        recipient.absorb(donor)
    }

    /// Release cluster `index` and shift every later cluster one slot left.
    ///
    /// # Panics
    /// If `index >= self.len()`.
    pub fn remove_at(&mut self, index: usize) {
        assert!(
            index < self.clusters.len(),
            "cluster index {} out of range for {} clusters",
            index,
            self.clusters.len()
        );

        self.clusters[index].clear();
        self.clusters.remove(index);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cluster> {
        self.clusters.iter()
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Total number of points over all clusters
    pub fn point_count(&self) -> usize {
        self.clusters.iter().map(Cluster::len).sum()
    }
}

impl std::ops::Index<usize> for ClusterSet {
    type Output = Cluster;

    fn index(&self, index: usize) -> &Cluster {
        &self.clusters[index]
    }
}

impl fmt::Display for ClusterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Clusters:")?;
        for (i, cluster) in self.clusters.iter().enumerate() {
            writeln!(f, "cluster {}: {}", i, cluster)?;
        }
        Ok(())
    }
}

impl Serialize for ClusterSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.clusters)
    }
}
