//! Nearest-node search under an optional maximum distance (§4.3).

use streetnet_core::{NodeId, Point2};

use crate::network::Graph;

/// The nearest node to `point` within `max_dist`, or `None` if no node
/// qualifies (an empty graph, or every node farther than `max_dist`). Ties
/// broken by lowest index.
pub fn nearest_node(graph: &Graph, point: Point2, max_dist: f64) -> Option<(NodeId, f64)> {
    let mut best: Option<(NodeId, f64)> = None;
    for node in graph.nodes_within(point, max_dist) {
        let d = graph.node_pos[node.index()].distance(point);
        best = Some(match best {
            None => (node, d),
            Some((bn, bd)) => {
                if d < bd || (d == bd && node.index() < bn.index()) {
                    (node, d)
                } else {
                    (bn, bd)
                }
            }
        });
    }
    best
}
