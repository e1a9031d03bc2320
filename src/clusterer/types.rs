use std::fmt;

use serde::{Serialize, Serializer};

use crate::clusterer::{ClusterError, CLUSTER_CHUNK};

/// Identifier of a point, unique within a run
pub type PointId = i64;

/// A labeled 2-D point. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub id: PointId,
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(id: PointId, x: f32, y: f32) -> Self {
        Self { id, x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{},{}]", self.id, self.x, self.y)
    }
}

/// An ordered, growable group of points.
///
/// `capacity` is the number of points storage has been reserved for. It only
/// ever grows by [`CLUSTER_CHUNK`] at a time when an append finds the cluster
/// full, and drops back to zero on [`Cluster::clear`].
#[derive(Debug, Clone, Default)]
pub struct Cluster {
    points: Vec<Point>,
    capacity: usize,
}

impl Cluster {
    /// Create an empty cluster with no reserved storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cluster with room for `capacity` points
    pub fn with_capacity(capacity: usize) -> Result<Self, ClusterError> {
        let mut cluster = Self::new();
        cluster.init(capacity)?;
        Ok(cluster)
    }

    /// Reset the cluster and reserve storage for `capacity` points.
    ///
    /// On allocation failure the cluster is left empty with capacity 0 and
    /// the error is returned; the caller decides whether that is fatal.
    pub fn init(&mut self, capacity: usize) -> Result<(), ClusterError> {
        self.clear();

        if capacity == 0 {
            return Ok(());
        }

        let mut points = Vec::new();
        points
            .try_reserve_exact(capacity)
            .map_err(|_| ClusterError::Allocation {
                requested: capacity,
            })?;

        self.points = points;
        self.capacity = capacity;
        Ok(())
    }

    /// Grow reserved storage to `new_capacity`. Never shrinks.
    pub fn resize(&mut self, new_capacity: usize) -> Result<(), ClusterError> {
        if self.capacity >= new_capacity {
            return Ok(());
        }

        self.points
            .try_reserve_exact(new_capacity - self.points.len())
            .map_err(|_| ClusterError::Allocation {
                requested: new_capacity,
            })?;

        self.capacity = new_capacity;
        Ok(())
    }

    /// Append a point, growing by one chunk if the cluster is full.
    ///
    /// If growth fails the point is dropped and the cluster is unchanged.
    pub fn append(&mut self, point: Point) -> Result<(), ClusterError> {
        if self.points.len() >= self.capacity {
            self.resize(self.capacity + CLUSTER_CHUNK)?;
        }

        self.points.push(point);
        Ok(())
    }

    /// Drop all points and release storage
    pub fn clear(&mut self) {
        self.points = Vec::new();
        self.capacity = 0;
    }

    /// Stable sort of the points by ascending id
    pub fn sort_by_id(&mut self) {
        self.points.sort_by_key(|p| p.id);
    }

    /// Append every point of `other`, then sort by id. `other` is untouched.
    ///
    /// A failed append stops the merge part way through; the caller must
    /// treat that as fatal.
    pub fn absorb(&mut self, other: &Cluster) -> Result<(), ClusterError> {
        for point in other.points() {
            self.append(*point)?;
        }

        self.sort_by_id();
        Ok(())
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn ids(&self) -> impl Iterator<Item = PointId> + '_ {
        self.points.iter().map(|p| p.id)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, point) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", point)?;
        }
        Ok(())
    }
}

impl Serialize for Cluster {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.points)
    }
}
