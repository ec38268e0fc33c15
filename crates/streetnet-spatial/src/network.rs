//! Packed node/edge arrays and the spatial index over node positions.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing edges.
//! Given a `NodeId n`, its outgoing edges occupy the slice:
//!
//! ```text
//! edge_to[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! All edge arrays are sorted by source node and indexed by `EdgeId`. Each
//! undirected street segment is represented by two directed edges. Iteration
//! over a node's outgoing edges is a contiguous memory scan.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps `Point2` to the nearest `NodeId`, used by the
//! radial filter, nearest-node search, and assignment kernels.

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use streetnet_core::{EdgeId, NodeId, Point2};

// ── R-tree node entry ─────────────────────────────────────────────────────────

#[derive(Clone)]
struct NodeEntry {
    point: [f64; 2],
    id: NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── Graph ─────────────────────────────────────────────────────────────────────

/// Packed node and edge arrays for a street network, plus a spatial index
/// over node positions.
///
/// All fields are `pub` for direct indexed access on hot paths. Do not
/// construct directly; use [`GraphBuilder`].
pub struct Graph {
    // ── Node record (§3): x, y, live, ghosted, weight ──────────────────────
    pub node_pos: Vec<Point2>,
    /// `false` masks a node's own aggregated results while it still
    /// contributes to paths (decomposed/extended buffer regions).
    pub node_live: Vec<bool>,
    /// Reserved flag for synthetic nodes; passed through unchanged.
    pub node_ghosted: Vec<bool>,
    /// Node mass used by weighted metrics. Defaults to half the sum of
    /// incident edge lengths.
    pub node_weight: Vec<f64>,

    // ── CSR edge adjacency ──────────────────────────────────────────────────
    /// Row pointer: outgoing edges of node `n` are at EdgeIds
    /// `node_out_start[n] .. node_out_start[n+1]`. Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,

    // ── Edge record (§3): start_idx, end_idx, length, impedance ────────────
    pub edge_from: Vec<NodeId>,
    pub edge_to: Vec<NodeId>,
    pub edge_length: Vec<f64>,
    pub edge_impedance: Vec<f64>,

    spatial_idx: RTree<NodeEntry>,
}

impl Graph {
    pub fn empty() -> Self {
        GraphBuilder::new().build().expect("empty graph is always valid")
    }

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_pos.is_empty()
    }

    /// Iterator over the `EdgeId`s of all outgoing edges from `node`.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(|i| EdgeId(i as u32))
    }

    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        let start = self.node_out_start[node.index()] as usize;
        let end = self.node_out_start[node.index() + 1] as usize;
        end - start
    }

    /// The nearest node to `pos`, with no distance bound. `None` only if the
    /// graph has no nodes. Used internally by the assignment walk; the §4.3
    /// max-distance contract lives in [`crate::nearest::nearest_node`].
    pub fn nearest_unbounded(&self, pos: Point2) -> Option<NodeId> {
        self.spatial_idx
            .nearest_neighbor(&[pos.x, pos.y])
            .map(|e| e.id)
    }

    /// All nodes within `radius` of `pos`, nearest first. Backs the radial
    /// filter (§4.2).
    pub fn nodes_within(&self, pos: Point2, radius: f64) -> impl Iterator<Item = NodeId> + '_ {
        self.spatial_idx
            .nearest_neighbor_iter_with_distance_2(&[pos.x, pos.y])
            .take_while(move |(_, d2)| *d2 <= radius * radius)
            .map(|(e, _)| e.id)
    }
}

// ── GraphBuilder ────────────────────────────────────────────────────────────────

/// Construct a [`Graph`] incrementally, then call [`build`](Self::build).
///
/// The builder accepts nodes and directed edges in any order; `build()`
/// sorts edges by source node, constructs the CSR arrays, computes default
/// node weights, and bulk-loads the R-tree.
pub struct GraphBuilder {
    node_pos: Vec<Point2>,
    node_live: Vec<bool>,
    node_ghosted: Vec<bool>,
    node_weight: Vec<Option<f64>>,
    raw_edges: Vec<RawEdge>,
}

struct RawEdge {
    from: NodeId,
    to: NodeId,
    length: f64,
    impedance: f64,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            node_pos: Vec::new(),
            node_live: Vec::new(),
            node_ghosted: Vec::new(),
            node_weight: Vec::new(),
            raw_edges: Vec::new(),
        }
    }

    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            node_pos: Vec::with_capacity(nodes),
            node_live: Vec::with_capacity(nodes),
            node_ghosted: Vec::with_capacity(nodes),
            node_weight: Vec::with_capacity(nodes),
            raw_edges: Vec::with_capacity(edges),
        }
    }

    /// Add a node and return its `NodeId` (sequential from 0). `weight` of
    /// `None` defers to the builder's default (half-sum of incident edge
    /// lengths, computed in [`build`](Self::build)).
    pub fn add_node(&mut self, pos: Point2, live: bool, ghosted: bool, weight: Option<f64>) -> NodeId {
        let id = NodeId(self.node_pos.len() as u32);
        self.node_pos.push(pos);
        self.node_live.push(live);
        self.node_ghosted.push(ghosted);
        self.node_weight.push(weight);
        id
    }

    /// Add a **directed** edge from `from` to `to`.
    pub fn add_directed_edge(&mut self, from: NodeId, to: NodeId, length: f64, impedance: f64) {
        self.raw_edges.push(RawEdge { from, to, length, impedance });
    }

    /// Add both directed edges for an undirected street segment.
    pub fn add_segment(&mut self, a: NodeId, b: NodeId, length: f64, impedance: f64) {
        self.add_directed_edge(a, b, length, impedance);
        self.add_directed_edge(b, a, length, impedance);
    }

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    pub fn edge_count(&self) -> usize {
        self.raw_edges.len()
    }

    /// Consume the builder and produce a [`Graph`], running the Checks
    /// contract (§4.1) before returning it.
    pub fn build(self) -> Result<Graph, crate::error::SpatialError> {
        let node_count = self.node_pos.len();
        let edge_count = self.raw_edges.len();

        let mut raw = self.raw_edges;
        raw.sort_unstable_by_key(|e| e.from.0);

        let edge_from: Vec<NodeId> = raw.iter().map(|e| e.from).collect();
        let edge_to: Vec<NodeId> = raw.iter().map(|e| e.to).collect();
        let edge_length: Vec<f64> = raw.iter().map(|e| e.length).collect();
        let edge_impedance: Vec<f64> = raw.iter().map(|e| e.impedance).collect();

        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, edge_count);

        // Default node weight: half the sum of incident (outgoing) edge
        // lengths — each undirected segment is stored twice, so this equals
        // half the sum over the segment's two directed copies i.e. the full
        // segment length shared between its endpoints.
        let mut node_weight = vec![0.0f64; node_count];
        for (i, w) in self.node_weight.iter().enumerate() {
            if let Some(w) = w {
                node_weight[i] = *w;
            }
        }
        for (i, w) in self.node_weight.iter().enumerate() {
            if w.is_none() {
                let start = node_out_start[i] as usize;
                let end = node_out_start[i + 1] as usize;
                let sum: f64 = edge_length[start..end].iter().sum();
                node_weight[i] = sum / 2.0;
            }
        }

        let entries: Vec<NodeEntry> = self
            .node_pos
            .iter()
            .enumerate()
            .map(|(i, &pos)| NodeEntry { point: [pos.x, pos.y], id: NodeId(i as u32) })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        let graph = Graph {
            node_pos: self.node_pos,
            node_live: self.node_live,
            node_ghosted: self.node_ghosted,
            node_weight,
            node_out_start,
            edge_from,
            edge_to,
            edge_length,
            edge_impedance,
            spatial_idx,
        };

        crate::checks::validate(&graph)?;
        Ok(graph)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
