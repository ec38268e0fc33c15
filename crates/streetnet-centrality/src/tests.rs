//! Unit tests for streetnet-centrality.

#[cfg(test)]
mod helpers {
    use streetnet_core::Point2;
    use streetnet_spatial::{Graph, GraphBuilder};

    /// Two nodes joined by a single 200m/200-impedance edge.
    pub fn isolated_pair() -> Graph {
        let mut b = GraphBuilder::new();
        let a = b.add_node(Point2::new(0.0, 0.0), true, false, None);
        let c = b.add_node(Point2::new(200.0, 0.0), true, false, None);
        b.add_segment(a, c, 200.0, 200.0);
        b.build().unwrap()
    }

    /// A 3-node path a-b-c, each segment 100m, to exercise betweenness.
    pub fn path_graph() -> Graph {
        let mut b = GraphBuilder::new();
        let a = b.add_node(Point2::new(0.0, 0.0), true, false, None);
        let mid = b.add_node(Point2::new(100.0, 0.0), true, false, None);
        let c = b.add_node(Point2::new(200.0, 0.0), true, false, None);
        b.add_segment(a, mid, 100.0, 100.0);
        b.add_segment(mid, c, 100.0, 100.0);
        b.build().unwrap()
    }
}

#[cfg(test)]
mod gravity {
    use streetnet_core::Distances;

    use crate::measure::Measure;
    use crate::{compute_centrality, tests::helpers::isolated_pair};

    #[test]
    fn matches_worked_example() {
        let graph = isolated_pair();
        let distances = Distances::new(vec![400.0]).unwrap();
        let results = compute_centrality(&graph, &distances, &[Measure::Gravity], false, false, false);
        let gravity = results.get(Measure::Gravity, 0, 0).unwrap();
        let expected = (-2.0_f64).exp();
        assert!((gravity - expected).abs() < 1e-9, "gravity={gravity} expected={expected}");
    }
}

#[cfg(test)]
mod monotonicity {
    use streetnet_core::Distances;

    use crate::measure::Measure;
    use crate::{compute_centrality, tests::helpers::path_graph};

    #[test]
    fn node_density_grows_with_distance() {
        let graph = path_graph();
        let distances = Distances::new(vec![100.0, 200.0]).unwrap();
        let results = compute_centrality(&graph, &distances, &[Measure::NodeDensity], false, false, false);
        let near = results.get(Measure::NodeDensity, 0, 0).unwrap();
        let far = results.get(Measure::NodeDensity, 1, 0).unwrap();
        assert!(near <= far);
    }
}

#[cfg(test)]
mod betweenness {
    use streetnet_core::Distances;

    use crate::measure::Measure;
    use crate::{compute_centrality, tests::helpers::path_graph};

    #[test]
    fn middle_node_lies_on_the_only_path() {
        let graph = path_graph();
        let distances = Distances::new(vec![300.0]).unwrap();
        let results = compute_centrality(&graph, &distances, &[Measure::Betweenness], false, false, false);
        // Every shortest path between the two endpoints passes through node 1.
        let mid_score = results.get(Measure::Betweenness, 0, 1).unwrap();
        assert!(mid_score > 0.0);
        // The endpoints themselves are never an intermediate node.
        assert_eq!(results.get(Measure::Betweenness, 0, 0).unwrap(), 0.0);
        assert_eq!(results.get(Measure::Betweenness, 0, 2).unwrap(), 0.0);
    }
}

#[cfg(test)]
mod improved_closeness {
    use streetnet_core::Distances;

    use crate::measure::Measure;
    use crate::{compute_centrality, tests::helpers::path_graph};

    #[test]
    fn derived_from_density_and_farness() {
        let graph = path_graph();
        let distances = Distances::new(vec![300.0]).unwrap();
        let results = compute_centrality(&graph, &distances, &[Measure::ImprovedCloseness], false, false, false);
        let ic = results.get(Measure::ImprovedCloseness, 0, 0).unwrap();
        assert!(ic > 0.0);
        // Internal-only accumulators used to derive it are not exposed.
        assert!(results.column.get(&Measure::NodeDensity).is_none());
        assert!(results.column.get(&Measure::FarnessDistance).is_none());
    }
}
