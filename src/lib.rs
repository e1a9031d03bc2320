//! Agglomerative hierarchical clustering of labeled 2-D points.
//!
//! Points are loaded one per cluster, then the two closest clusters are merged
//! until a target count remains. Cluster distance is chosen from nearest,
//! farthest or average linkage.

// Public API exports
pub mod clusterer;
pub mod loader;
pub mod report;

// Re-export main types for convenience
pub use clusterer::{
    agglomerate, point_distance, AgglomerationResult, Agglomerator, Cluster, ClusterDistance,
    ClusterError, ClusterSet, Linkage, NeighborFinder, Point, PointId, CLUSTER_CHUNK,
    DEFAULT_TARGET,
};

pub use loader::{
    LoadError, LoadErrorKind, Loader, FILE_FORMAT_HELP, MAX_COORDINATE, MAX_OBJECTS, MIN_COORDINATE,
};

pub use report::PartitionReport;
