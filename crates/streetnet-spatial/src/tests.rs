//! Unit tests for streetnet-spatial.

#[cfg(test)]
mod helpers {
    use streetnet_core::Point2;

    use crate::network::{Graph, GraphBuilder};

    /// A 3x3 grid of nodes, 100m spacing, four-way connected (no diagonals):
    ///
    /// ```text
    /// 6 - 7 - 8
    /// |   |   |
    /// 3 - 4 - 5
    /// |   |   |
    /// 0 - 1 - 2
    /// ```
    pub fn grid_graph() -> Graph {
        let mut b = GraphBuilder::new();
        let mut ids = Vec::new();
        for row in 0..3 {
            for col in 0..3 {
                let id = b.add_node(Point2::new(col as f64 * 100.0, row as f64 * 100.0), true, false, None);
                ids.push(id);
            }
        }
        let idx = |row: usize, col: usize| ids[row * 3 + col];
        for row in 0..3 {
            for col in 0..3 {
                if col + 1 < 3 {
                    b.add_segment(idx(row, col), idx(row, col + 1), 100.0, 100.0);
                }
                if row + 1 < 3 {
                    b.add_segment(idx(row, col), idx(row + 1, col), 100.0, 100.0);
                }
            }
        }
        b.build().expect("grid graph is valid")
    }
}

#[cfg(test)]
mod builder {
    use streetnet_core::Point2;

    use crate::network::GraphBuilder;

    #[test]
    fn default_weight_is_half_incident_length() {
        let mut b = GraphBuilder::new();
        let a = b.add_node(Point2::new(0.0, 0.0), true, false, None);
        let c = b.add_node(Point2::new(100.0, 0.0), true, false, None);
        b.add_segment(a, c, 100.0, 100.0);
        let graph = b.build().unwrap();
        // Each node has exactly one outgoing edge of length 100 -> weight 50.
        assert_eq!(graph.node_weight[a.index()], 50.0);
        assert_eq!(graph.node_weight[c.index()], 50.0);
    }

    #[test]
    fn explicit_weight_is_preserved() {
        let mut b = GraphBuilder::new();
        let a = b.add_node(Point2::new(0.0, 0.0), true, false, Some(7.5));
        let c = b.add_node(Point2::new(100.0, 0.0), true, false, None);
        b.add_segment(a, c, 100.0, 100.0);
        let graph = b.build().unwrap();
        assert_eq!(graph.node_weight[a.index()], 7.5);
    }

    #[test]
    fn rejects_missing_reverse_edge() {
        let mut b = GraphBuilder::new();
        let a = b.add_node(Point2::new(0.0, 0.0), true, false, None);
        let c = b.add_node(Point2::new(100.0, 0.0), true, false, None);
        b.add_directed_edge(a, c, 100.0, 100.0); // one-way only
        assert!(b.build().is_err());
    }

    #[test]
    fn rejects_non_positive_length() {
        let mut b = GraphBuilder::new();
        let a = b.add_node(Point2::new(0.0, 0.0), true, false, None);
        let c = b.add_node(Point2::new(100.0, 0.0), true, false, None);
        b.add_segment(a, c, 0.0, 100.0);
        assert!(b.build().is_err());
    }

    #[test]
    fn rejects_non_finite_coordinate() {
        let mut b = GraphBuilder::new();
        b.add_node(Point2::new(f64::NAN, 0.0), true, false, None);
        assert!(b.build().is_err());
    }
}

#[cfg(test)]
mod radial {
    use crate::radial::radial_filter_from_node;
    use crate::tests::helpers::grid_graph;

    #[test]
    fn trim_map_round_trips_on_survivors() {
        let graph = grid_graph();
        let src = streetnet_core::NodeId(4); // centre node
        let trim = radial_filter_from_node(&graph, src, 150.0);
        for (full_idx, slot) in trim.full_to_trim.iter().enumerate() {
            if let Some(j) = slot {
                assert_eq!(trim.trim_to_full[*j as usize].index(), full_idx);
            }
        }
        assert_eq!(trim.len(), trim.full_to_trim.iter().filter(|s| s.is_some()).count());
    }

    #[test]
    fn zero_radius_keeps_only_source() {
        let graph = grid_graph();
        let src = streetnet_core::NodeId(4);
        let trim = radial_filter_from_node(&graph, src, 0.0);
        assert_eq!(trim.len(), 1);
        assert_eq!(trim.trim_to_full[0], src);
    }

    #[test]
    fn every_survivor_within_radius() {
        let graph = grid_graph();
        let src_pos = graph.node_pos[4];
        let trim = radial_filter_from_node(&graph, streetnet_core::NodeId(4), 150.0);
        for &full in &trim.trim_to_full {
            assert!(graph.node_pos[full.index()].distance(src_pos) <= 150.0);
        }
    }
}

#[cfg(test)]
mod nearest {
    use streetnet_core::Point2;

    use crate::nearest::nearest_node;
    use crate::tests::helpers::grid_graph;

    #[test]
    fn finds_nearest_within_bound() {
        let graph = grid_graph();
        let (id, dist) = nearest_node(&graph, Point2::new(10.0, 5.0), 200.0).unwrap();
        assert_eq!(id, streetnet_core::NodeId(0));
        assert!((dist - 10.0_f64.hypot(5.0)).abs() < 1e-9);
    }

    #[test]
    fn none_when_out_of_bound() {
        let graph = grid_graph();
        assert!(nearest_node(&graph, Point2::new(10.0, 5.0), 5.0).is_none());
    }
}

#[cfg(test)]
mod spt {
    use streetnet_core::{NodeId, SptMode};

    use crate::radial::radial_filter_from_node;
    use crate::spt::build_spt;
    use crate::tests::helpers::grid_graph;

    #[test]
    fn root_has_zero_impedance_and_distance() {
        let graph = grid_graph();
        let src = NodeId(0);
        let trim = radial_filter_from_node(&graph, src, 1000.0);
        let tree = build_spt(&graph, &trim, src, 1000.0, SptMode::Metric);
        let src_trim = trim.full_to_trim[src.index()].unwrap() as usize;
        assert_eq!(tree.impedance[src_trim], 0.0);
        assert_eq!(tree.distance[src_trim], 0.0);
        assert_eq!(tree.pred[src_trim], -1);
    }

    #[test]
    fn distance_matches_predecessor_chain_length_sum() {
        let graph = grid_graph();
        let src = NodeId(0);
        let trim = radial_filter_from_node(&graph, src, 1000.0);
        let tree = build_spt(&graph, &trim, src, 1000.0, SptMode::Metric);

        // node 8 (top-right corner) is reached via a 4-edge shortest path of
        // 100m segments -> distance 400.
        let target_trim = trim.full_to_trim[8].unwrap() as usize;
        assert!(tree.is_reached(target_trim));
        assert_eq!(tree.distance[target_trim], 400.0);

        let mut walked = 0.0;
        let mut j = target_trim;
        while tree.pred[j] >= 0 {
            let from_full = trim.trim_to_full[tree.pred[j] as usize];
            let to_full = trim.trim_to_full[j];
            let edge_len = graph
                .out_edges(from_full)
                .find(|e| graph.edge_to[e.index()] == to_full)
                .map(|e| graph.edge_length[e.index()])
                .unwrap();
            walked += edge_len;
            j = tree.pred[j] as usize;
        }
        assert_eq!(walked, tree.distance[target_trim]);
    }

    #[test]
    fn radius_gate_excludes_far_nodes() {
        let graph = grid_graph();
        let src = NodeId(0);
        let trim = radial_filter_from_node(&graph, src, 1000.0);
        let tree = build_spt(&graph, &trim, src, 150.0, SptMode::Metric);
        let far_trim = trim.full_to_trim[8].unwrap() as usize; // distance 400 > 150
        assert!(!tree.is_reached(far_trim));
    }

    #[test]
    fn grid_loop_increments_cycle_count() {
        // The full 3x3 grid contains loops (e.g. 0-1-4-3-0); with a radius
        // large enough to cover the whole grid, cycle edges must be counted
        // on both endpoints they close on.
        let graph = grid_graph();
        let src = NodeId(0);
        let trim = radial_filter_from_node(&graph, src, 1000.0);
        let tree = build_spt(&graph, &trim, src, 1000.0, SptMode::Metric);
        let total_cycles: u32 = tree.cycles.iter().sum();
        assert!(total_cycles > 0);
    }

    #[test]
    fn angular_mode_zero_turn_on_first_edge() {
        let graph = grid_graph();
        let src = NodeId(0);
        let trim = radial_filter_from_node(&graph, src, 1000.0);
        let tree = build_spt(&graph, &trim, src, 1000.0, SptMode::Angular);
        let neighbor_trim = trim.full_to_trim[1].unwrap() as usize; // directly right of src
        assert_eq!(tree.impedance[neighbor_trim], 0.0);
    }

    #[test]
    fn angular_mode_accumulates_turn_cost_on_corner() {
        let graph = grid_graph();
        let src = NodeId(0);
        let trim = radial_filter_from_node(&graph, src, 1000.0);
        let tree = build_spt(&graph, &trim, src, 1000.0, SptMode::Angular);
        // Node 4 (centre) is reachable straight through node 1 with zero turn,
        // or via node 3 with zero turn — either way there is a path with
        // total turn cost zero.
        let centre_trim = trim.full_to_trim[4].unwrap() as usize;
        assert_eq!(tree.impedance[centre_trim], 0.0);
    }
}

#[cfg(test)]
mod assign {
    use streetnet_core::{NodeId, Point2};

    use crate::assign::assign_point;
    use crate::tests::helpers::grid_graph;

    #[test]
    fn point_on_edge_assigns_both_endpoints() {
        let graph = grid_graph();
        // Midpoint of the segment between node 0 (0,0) and node 1 (100,0).
        let anchors = assign_point(&graph, Point2::new(50.0, 1.0), 200.0);
        assert!(anchors.nearest.is_some());
        assert!(anchors.next_nearest.is_some());
        let mut pair = [anchors.nearest.unwrap().index(), anchors.next_nearest.unwrap().index()];
        pair.sort_unstable();
        assert_eq!(pair, [0, 1]);
    }

    #[test]
    fn point_far_beyond_reach_is_unassigned() {
        let graph = grid_graph();
        let anchors = assign_point(&graph, Point2::new(10_000.0, 10_000.0), 50.0);
        assert_eq!(anchors.nearest, None);
        assert_eq!(anchors.next_nearest, None);
    }

    #[test]
    fn nearest_is_closer_endpoint() {
        let graph = grid_graph();
        // Point close to node 0 along the same segment.
        let anchors = assign_point(&graph, Point2::new(5.0, 1.0), 200.0);
        assert_eq!(anchors.nearest, Some(NodeId(0)));
    }
}
