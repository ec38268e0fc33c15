//! Shortest-path tree construction from a source node (§4.4).
//!
//! Dijkstra expansion over the radially trimmed subgraph, using `impedance`
//! as the priority key. Two modes share one implementation: **metric**
//! (impedance = edge impedance field) and **angular** (impedance = cumulative
//! turn-cost deviation, computed from node geometry at relaxation time).
//! `distance` always tracks metric edge length, so the radius gate stays
//! metric in either mode.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;
use streetnet_core::{NodeId, Point2, SptMode};

use crate::network::Graph;
use crate::radial::TrimMap;

/// Per-source tree vectors, indexed by trimmed node id (§3).
pub struct Spt {
    pub impedance: Vec<f64>,
    pub distance: Vec<f64>,
    /// Trimmed predecessor index, or `-1` for the root / an unreached node.
    pub pred: Vec<i32>,
    pub cycles: Vec<u32>,
}

impl Spt {
    /// `true` if trimmed node `j` was reached from the source.
    pub fn is_reached(&self, j: usize) -> bool {
        self.distance[j].is_finite()
    }

    /// Walk the predecessor chain from trimmed node `j` back to the root,
    /// yielding the intermediate trimmed indices in order `j, ..., src`
    /// (inclusive of both ends). Used by betweenness aggregation (§4.6).
    pub fn path_to_root(&self, mut j: usize) -> Vec<usize> {
        let mut path = vec![j];
        while self.pred[j] >= 0 {
            j = self.pred[j] as usize;
            path.push(j);
        }
        path
    }
}

/// Turn-cost deviation angle in degrees between the bearing `prev -> curr`
/// and the bearing `curr -> next`. `0` means straight ahead, `180` means a
/// full reversal. Degenerate (zero-length) segments contribute `0`.
fn turn_angle(prev: Point2, curr: Point2, next: Point2) -> f64 {
    let v1x = curr.x - prev.x;
    let v1y = curr.y - prev.y;
    let v2x = next.x - curr.x;
    let v2y = next.y - curr.y;

    let n1 = (v1x * v1x + v1y * v1y).sqrt();
    let n2 = (v2x * v2x + v2y * v2y).sqrt();
    if n1 == 0.0 || n2 == 0.0 {
        return 0.0;
    }

    let cos_theta = ((v1x * v2x + v1y * v2y) / (n1 * n2)).clamp(-1.0, 1.0);
    cos_theta.acos().to_degrees()
}

/// Build the shortest-path tree from `src` over the nodes retained in `trim`,
/// gated at metric distance `max_dist`.
pub fn build_spt(graph: &Graph, trim: &TrimMap, src: NodeId, max_dist: f64, mode: SptMode) -> Spt {
    let m = trim.len();
    let src_trim = trim.full_to_trim[src.index()].expect("source must survive its own trim map") as usize;

    let mut impedance = vec![f64::INFINITY; m];
    let mut distance = vec![f64::INFINITY; m];
    let mut pred = vec![-1i32; m];
    let mut cycles = vec![0u32; m];
    let mut settled = vec![false; m];

    impedance[src_trim] = 0.0;
    distance[src_trim] = 0.0;

    let mut seq: u64 = 0;
    let mut heap: BinaryHeap<Reverse<(OrderedFloat<f64>, u64, u32)>> = BinaryHeap::new();
    heap.push(Reverse((OrderedFloat(0.0), seq, src_trim as u32)));

    while let Some(Reverse((key, _, a_trim_u32))) = heap.pop() {
        let a_trim = a_trim_u32 as usize;
        if settled[a_trim] {
            continue;
        }
        if key.0 > impedance[a_trim] {
            // Stale heap entry superseded by a better relaxation.
            continue;
        }
        settled[a_trim] = true;

        let a_full = trim.trim_to_full[a_trim];
        let pred_full = if pred[a_trim] >= 0 {
            Some(trim.trim_to_full[pred[a_trim] as usize])
        } else {
            None
        };

        for edge in graph.out_edges(a_full) {
            let b_full = graph.edge_to[edge.index()];
            let Some(b_trim) = trim.full_to_trim[b_full.index()] else {
                continue;
            };
            let b_trim = b_trim as usize;

            let tentative_distance = distance[a_trim] + graph.edge_length[edge.index()];
            if tentative_distance > max_dist {
                continue;
            }

            // Skip the edge back to where we came from — never a cycle.
            if pred[a_trim] >= 0 && b_trim == pred[a_trim] as usize {
                continue;
            }

            let contribution = match mode {
                SptMode::Metric => graph.edge_impedance[edge.index()],
                SptMode::Angular => match pred_full {
                    None => 0.0,
                    Some(p) => turn_angle(graph.node_pos[p.index()], graph.node_pos[a_full.index()], graph.node_pos[b_full.index()]),
                },
            };
            let tentative_impedance = impedance[a_trim] + contribution;

            if impedance[b_trim].is_finite() {
                // b has already been reached by some route.
                if tentative_impedance < impedance[b_trim] && !settled[b_trim] {
                    impedance[b_trim] = tentative_impedance;
                    distance[b_trim] = tentative_distance;
                    pred[b_trim] = a_trim as i32;
                    seq += 1;
                    heap.push(Reverse((OrderedFloat(tentative_impedance), seq, b_trim as u32)));
                } else if a_trim < b_trim {
                    // Equal-or-worse alternate route into an already-reached
                    // node: a cycle has closed on this edge. Each undirected
                    // edge is scanned from both endpoints; only count it once.
                    cycles[a_trim] += 1;
                    cycles[b_trim] += 1;
                }
            } else {
                impedance[b_trim] = tentative_impedance;
                distance[b_trim] = tentative_distance;
                pred[b_trim] = a_trim as i32;
                seq += 1;
                heap.push(Reverse((OrderedFloat(tentative_impedance), seq, b_trim as u32)));
            }
        }
    }

    Spt { impedance, distance, pred, cycles }
}
