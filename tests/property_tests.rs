use std::collections::BTreeSet;

use agglo::{agglomerate, Cluster, ClusterDistance, ClusterSet, Linkage, Point, PointId};
use proptest::prelude::*;

fn coords() -> impl Strategy<Value = Vec<(f32, f32)>> {
    prop::collection::vec((0.0f32..=1000.0, 0.0f32..=1000.0), 1..12)
}

fn cluster_from(first_id: PointId, coords: &[(f32, f32)]) -> Cluster {
    let mut cluster = Cluster::new();
    for (offset, &(x, y)) in coords.iter().enumerate() {
        cluster
            .append(Point::new(first_id + offset as PointId, x, y))
            .unwrap();
    }
    cluster
}

fn singletons(coords: &[(f32, f32)]) -> ClusterSet {
    let mut set = ClusterSet::new();
    for (id, &(x, y)) in coords.iter().enumerate() {
        set.push(cluster_from(id as PointId, &[(x, y)])).unwrap();
    }
    set
}

proptest! {
    #[test]
    fn prop_linkage_symmetric(a in coords(), b in coords()) {
        let c1 = cluster_from(0, &a);
        let c2 = cluster_from(100, &b);

        for linkage in [Linkage::Average, Linkage::Nearest, Linkage::Farthest] {
            prop_assert_eq!(linkage.distance(&c1, &c2), linkage.distance(&c2, &c1));
        }
    }

    #[test]
    fn prop_linkage_ordering(a in coords(), b in coords()) {
        let c1 = cluster_from(0, &a);
        let c2 = cluster_from(100, &b);

        let near = Linkage::Nearest.distance(&c1, &c2);
        let avg = Linkage::Average.distance(&c1, &c2);
        let far = Linkage::Farthest.distance(&c1, &c2);

        prop_assert!(near <= avg + 1e-3 * avg.max(1.0));
        prop_assert!(avg <= far + 1e-3 * far.max(1.0));
    }

    #[test]
    fn prop_merge_is_sorted_union(a in coords(), b in coords()) {
        // Interleave ids so sorting actually has work to do
        let mut set = ClusterSet::new();
        let mut left = Cluster::new();
        for (i, &(x, y)) in a.iter().enumerate() {
            left.append(Point::new(2 * i as PointId + 1, x, y)).unwrap();
        }
        let mut right = Cluster::new();
        for (i, &(x, y)) in b.iter().enumerate() {
            right.append(Point::new(2 * i as PointId, x, y)).unwrap();
        }

        let expected: BTreeSet<PointId> = left.ids().chain(right.ids()).collect();
        set.push(left).unwrap();
        set.push(right).unwrap();

        set.merge(0, 1).unwrap();
        set.remove_at(1);

        prop_assert_eq!(set.len(), 1);
        prop_assert_eq!(set[0].len(), a.len() + b.len());
        prop_assert!(set[0].capacity() >= set[0].len());

        let ids: Vec<PointId> = set[0].ids().collect();
        prop_assert!(ids.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(ids.into_iter().collect::<BTreeSet<_>>(), expected);
    }

    #[test]
    fn prop_target_one_collects_all_points(points in coords(), pick in 0usize..3) {
        let linkage = [Linkage::Average, Linkage::Nearest, Linkage::Farthest][pick];
        let n = points.len();

        let result = agglomerate(singletons(&points), 1, linkage).unwrap();

        prop_assert_eq!(result.clusters.len(), 1);
        prop_assert_eq!(result.merges, n - 1);
        let ids: Vec<PointId> = result.clusters[0].ids().collect();
        prop_assert_eq!(ids, (0..n as PointId).collect::<Vec<_>>());
    }

    #[test]
    fn prop_reaches_any_valid_target(points in coords(), target_seed in 0usize..100) {
        let n = points.len();
        let target = 1 + target_seed % n;

        let result = agglomerate(singletons(&points), target, Linkage::Average).unwrap();

        prop_assert_eq!(result.clusters.len(), target);
        prop_assert_eq!(result.merges, n - target);
        prop_assert_eq!(result.clusters.point_count(), n);
        prop_assert!(result.clusters.iter().all(|c| !c.is_empty()));
    }
}
