//! Data-point assignment to network anchors (§4.5).
//!
//! Each data point is assigned the two network nodes that form the endpoints
//! of the segment most plausibly containing it: a nearest node found via
//! [`crate::nearest::nearest_node`], then a walk across incident edges that
//! greedily minimises the perpendicular distance from the point to the
//! candidate segment.

use streetnet_core::{NodeId, Point2};

use crate::network::Graph;

/// The two anchors assigned to a data point, or `None` where unassigned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchors {
    pub nearest: Option<NodeId>,
    pub next_nearest: Option<NodeId>,
}

impl Anchors {
    pub const NONE: Anchors = Anchors { nearest: None, next_nearest: None };
}

/// Perpendicular (clamped-to-segment) distance from `p` to the segment
/// `(a, b)`.
fn point_segment_distance(p: Point2, a: Point2, b: Point2) -> f64 {
    let abx = b.x - a.x;
    let aby = b.y - a.y;
    let len_sq = abx * abx + aby * aby;
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p.x - a.x) * abx + (p.y - a.y) * aby) / len_sq;
    let t = t.clamp(0.0, 1.0);
    let foot = Point2::new(a.x + t * abx, a.y + t * aby);
    p.distance(foot)
}

/// Assign a single data point to its anchors. `max_assign_dist` bounds both
/// the initial nearest-node search and the accepted walk distance.
pub fn assign_point(graph: &Graph, point: Point2, max_assign_dist: f64) -> Anchors {
    let Some((n0, _)) = crate::nearest::nearest_node(graph, point, max_assign_dist) else {
        return Anchors::NONE;
    };

    let mut current = n0;
    let mut best_near: Option<NodeId> = None;
    let mut best_neighbor: Option<NodeId> = None;
    let mut best_dist = f64::INFINITY;

    loop {
        let current_pos = graph.node_pos[current.index()];
        let mut neighbors: Vec<NodeId> = graph.out_edges(current).map(|e| graph.edge_to[e.index()]).collect();
        neighbors.sort_unstable_by_key(|n| n.index());
        neighbors.dedup();

        let mut local_best: Option<(NodeId, f64)> = None;
        for neighbor in neighbors {
            let d = point_segment_distance(point, current_pos, graph.node_pos[neighbor.index()]);
            match local_best {
                None => local_best = Some((neighbor, d)),
                Some((_, bd)) if d < bd => local_best = Some((neighbor, d)),
                _ => {}
            }
        }

        match local_best {
            None => break,
            Some((neighbor, d)) => {
                if d < best_dist {
                    best_dist = d;
                    best_near = Some(current);
                    best_neighbor = Some(neighbor);
                    current = neighbor;
                } else {
                    break;
                }
            }
        }
    }

    match (best_near, best_neighbor) {
        (Some(near), Some(far)) if best_dist <= max_assign_dist => {
            let d_near = graph.node_pos[near.index()].distance(point);
            let d_far = graph.node_pos[far.index()].distance(point);
            if d_near <= d_far {
                Anchors { nearest: Some(near), next_nearest: Some(far) }
            } else {
                Anchors { nearest: Some(far), next_nearest: Some(near) }
            }
        }
        _ => Anchors { nearest: Some(n0), next_nearest: None },
    }
}

/// Assign every point in `points` against `graph`, in input order.
pub fn assign_all(graph: &Graph, points: &[Point2], max_assign_dist: f64) -> Vec<Anchors> {
    points.iter().map(|&p| assign_point(graph, p, max_assign_dist)).collect()
}
