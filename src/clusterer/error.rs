use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClusterError {
    #[error("Failed to allocate storage for {requested} points")]
    Allocation { requested: usize },

    #[error("Requested {target} clusters, but only {count} are available")]
    InvalidTarget { target: usize, count: usize },
}
