//! Radial filter: bidirectional index maps between the full node array and
//! the subset within a bounding radius of a source (§4.2).

use streetnet_core::{NodeId, Point2};

use crate::network::Graph;

/// Paired index arrays translating between the full node array and the
/// subset retained after radial filtering, per §3.
pub struct TrimMap {
    /// `full_to_trim[i]` is `Some(trimmed index)` if node `i` survives, else
    /// `None`.
    pub full_to_trim: Vec<Option<u32>>,
    /// `trim_to_full[j]` is the full index of the `j`-th survivor.
    pub trim_to_full: Vec<NodeId>,
}

impl TrimMap {
    pub fn len(&self) -> usize {
        self.trim_to_full.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trim_to_full.is_empty()
    }
}

/// Build the trim map for nodes within `radius` of `(sx, sy)`. Metric:
/// Euclidean on the projected plane. `radius = 0` keeps only the source.
///
/// Complexity O(N) over the full node array — callers that only need a
/// handful of nearby nodes from a spatially indexed graph should prefer
/// [`Graph::nodes_within`] instead; this function is the literal-contract
/// form used when every full-to-trim slot must be populated.
pub fn radial_filter(graph: &Graph, source: Point2, radius: f64) -> TrimMap {
    let n = graph.node_count();
    let mut full_to_trim = vec![None; n];
    let mut trim_to_full = Vec::new();

    for i in 0..n {
        if graph.node_pos[i].distance(source) <= radius {
            full_to_trim[i] = Some(trim_to_full.len() as u32);
            trim_to_full.push(NodeId(i as u32));
        }
    }

    TrimMap { full_to_trim, trim_to_full }
}

/// Radial filter rooted at an existing node, for convenience at call sites
/// that already hold a `NodeId` source.
pub fn radial_filter_from_node(graph: &Graph, src: NodeId, radius: f64) -> TrimMap {
    radial_filter(graph, graph.node_pos[src.index()], radius)
}
