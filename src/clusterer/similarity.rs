use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::clusterer::{Cluster, Point};

pub fn point_distance(a: &Point, b: &Point) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;

    (dx * dx + dy * dy).sqrt()
}

/// Distance between two whole clusters
pub trait ClusterDistance {
    /// Both clusters must be non-empty.
    fn distance(&self, a: &Cluster, b: &Cluster) -> f32;
}

/// Inter-cluster distance strategy, fixed for a whole run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Linkage {
    /// Unweighted pair-group average of all pairwise distances
    #[default]
    Average,
    /// Single linkage: the closest pair of points
    Nearest,
    /// Complete linkage: the farthest pair of points
    Farthest,
}

impl ClusterDistance for Linkage {
    fn distance(&self, a: &Cluster, b: &Cluster) -> f32 {
        debug_assert!(!a.is_empty() && !b.is_empty());

        // Always accumulate in the same order so distance(a, b) == distance(b, a)
        let (a, b) = if b.ids().lt(a.ids()) { (b, a) } else { (a, b) };

        let pairs = a
            .points()
            .iter()
            .flat_map(|p| b.points().iter().map(move |q| point_distance(p, q)));

        match self {
            Linkage::Nearest => pairs.fold(f32::INFINITY, |best, d| d.min(best)),
            Linkage::Farthest => pairs.fold(0.0, |best, d| d.max(best)),
            Linkage::Average => {
                let total: f32 = pairs.sum();
                total / (a.len() * b.len()) as f32
            }
        }
    }
}

impl Linkage {
    pub fn name(&self) -> &'static str {
        match self {
            Linkage::Average => "average",
            Linkage::Nearest => "nearest",
            Linkage::Farthest => "farthest",
        }
    }
}

impl fmt::Display for Linkage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Linkage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "avg" | "average" => Ok(Linkage::Average),
            "min" | "nearest" | "single" => Ok(Linkage::Nearest),
            "max" | "farthest" | "complete" => Ok(Linkage::Farthest),
            other => Err(format!("unknown linkage: {}", other)),
        }
    }
}
