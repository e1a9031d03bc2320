mod agglomerate;
mod error;
mod neighbors;
mod set;
mod similarity;
mod types;


pub use agglomerate::{agglomerate, AgglomerationResult, Agglomerator};
pub use error::ClusterError;
pub use neighbors::NeighborFinder;
pub use set::ClusterSet;
pub use similarity::{point_distance, ClusterDistance, Linkage};
pub use types::{Cluster, Point, PointId};

/// Number of points a cluster grows by whenever it runs out of room.
///
/// Growth is a constant increment, not a multiplicative factor.
pub const CLUSTER_CHUNK: usize = 10;

/// Target cluster count used when none is requested.
pub const DEFAULT_TARGET: usize = 1;
